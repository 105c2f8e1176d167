use super::{Browser, Section, UserAgent, bot, platform, sections};
use regex::Regex;
use std::sync::{Arc, LazyLock};

#[expect(clippy::expect_used, reason = "constant pattern")]
static IE11_RV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rv:(.+)$").expect("valid IE11 rv regex"));

/// In-progress classification of a single `User-Agent`.
///
/// All properties borrow from the header being parsed (or are static),
/// and are only copied once the pass is finished.
#[derive(Debug, Default)]
pub(super) struct Staging<'a> {
    pub(super) ua: &'a str,
    pub(super) mozilla: &'a str,
    pub(super) platform: &'a str,
    pub(super) os: &'a str,
    pub(super) localization: &'a str,
    pub(super) engine: &'a str,
    pub(super) engine_version: &'a str,
    pub(super) name: &'a str,
    pub(super) version: &'a str,
    pub(super) bot: bool,
    pub(super) mobile: bool,
    pub(super) undecided: bool,
}

impl<'a> Staging<'a> {
    fn new(ua: &'a str) -> Self {
        Self {
            ua,
            ..Default::default()
        }
    }

    /// Mark as mobile. Once marked there is no way back.
    pub(super) fn mark_mobile(&mut self) {
        self.mobile = true;
    }

    /// Googlebot hides in all kinds of layouts: whenever it shows up
    /// the platform is dropped and the bot classifier gets the final say.
    ///
    /// Returns whether classification is (now) undecided.
    pub(super) fn googlebot(&mut self) -> bool {
        if self.ua.contains("Googlebot") {
            self.platform = "";
            self.undecided = true;
        }
        self.undecided
    }

    /// Replace browser identity, dropping engine, os and localization.
    pub(super) fn set_simple(&mut self, name: &'a str, version: &'a str, bot: bool) {
        self.bot = bot;
        if !bot {
            self.mozilla = "";
        }
        self.name = name;
        self.version = version;
        self.engine = "";
        self.engine_version = "";
        self.os = "";
        self.localization = "";
    }

    fn finish(self, header: Arc<str>) -> UserAgent {
        UserAgent {
            header,
            mozilla: self.mozilla.to_owned(),
            platform: self.platform.to_owned(),
            os: self.os.to_owned(),
            localization: self.localization.to_owned(),
            browser: Browser {
                engine: self.engine.to_owned(),
                engine_version: self.engine_version.to_owned(),
                name: self.name.to_owned(),
                version: self.version.to_owned(),
            },
            bot: self.bot,
            mobile: self.mobile,
        }
    }
}

/// parse the http user agent string and return a [`UserAgent`] info,
/// containing the parsed information or empty properties for
/// anything that could not be detected.
///
/// # Remarks
///
/// NOTE that this function does not aim to be:
///
/// - correct for all inputs: it is a best-effort heuristic classifier;
/// - a signature database: only the layouts of popular agents are known.
pub(crate) fn parse_http_user_agent_header(header: Arc<str>) -> UserAgent {
    let mut ua = Staging::new(&header);

    let sections: Vec<_> = sections(&header)
        .inspect(|section| {
            if section.name() == "Mobile" {
                ua.mark_mobile();
            }
        })
        .collect();

    if let Some(first) = sections.first() {
        if first.name() == "Mozilla" {
            ua.mozilla = first.version();
        }

        detect_browser(&mut ua, &sections);
        platform::detect_os(&mut ua, first);
        ua.googlebot();

        if ua.undecided {
            tracing::trace!(
                user_agent.original = %header,
                "user agent undecided after engine and os detection: check for bots"
            );
            bot::check_bot(&mut ua, &sections);
        }
    }

    ua.finish(Arc::clone(&header))
}

/// Detect engine and browser from the ordered sections.
fn detect_browser<'a>(ua: &mut Staging<'a>, sections: &[Section<'a>]) {
    let Some(first) = sections.first() else {
        return;
    };

    match first.name() {
        "Opera" => {
            ua.name = "Opera";
            ua.version = first.version();
            ua.engine = "Presto";
            if let Some(engine) = sections.get(1) {
                ua.engine_version = engine.version();
            }
        }
        // no browser attached to Dalvik, it is still Mozilla compatible though
        "Dalvik" => ua.mozilla = "5.0",
        _ if sections.len() > 1 => detect_engine_browser(ua, sections),
        _ => detect_legacy_ie(ua, first),
    }
}

/// Layout where the second section is the engine.
fn detect_engine_browser<'a>(ua: &mut Staging<'a>, sections: &[Section<'a>]) {
    let (Some(first), Some(engine)) = (sections.first(), sections.get(1)) else {
        return;
    };
    ua.engine = engine.name();
    ua.engine_version = engine.version();

    let Some(third) = sections.get(2) else {
        return;
    };

    // e.g. Ubuntu puts an unversioned token after the engine
    let browser = match sections.get(3) {
        Some(fourth) if third.version().is_empty() => fourth,
        _ => third,
    };
    ua.version = browser.version();

    match engine.name() {
        "AppleWebKit" => {
            let last = sections.last().unwrap_or(browser);
            match last.name() {
                "Edge" => {
                    ua.name = "Edge";
                    ua.version = last.version();
                    ua.engine = "EdgeHTML";
                    ua.engine_version = "";
                }
                "OPR" => {
                    ua.name = "Opera";
                    ua.version = last.version();
                }
                _ => {
                    ua.name = match browser.name() {
                        name @ ("Chrome" | "Chromium") => name,
                        _ => "Safari",
                    };
                }
            }
        }
        "Gecko" => {
            ua.name = third.name();
            if third.name() == "MRA" {
                if let Some(fifth) = sections.get(4) {
                    ua.name = fifth.name();
                    ua.version = fifth.version();
                }
            }
        }
        "like" if third.name() == "Gecko" => {
            // Internet Explorer 11 no longer announces itself as MSIE
            ua.engine = "Trident";
            ua.name = "Internet Explorer";
            ua.version = first
                .comments()
                .iter()
                .find_map(|&comment| IE11_RV.captures(comment)?.get(1))
                .map(|version| version.as_str())
                .unwrap_or_default();
        }
        _ => (),
    }
}

/// Single section layout of Internet Explorer up to version 10,
/// e.g. `Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)`.
fn detect_legacy_ie<'a>(ua: &mut Staging<'a>, section: &Section<'a>) {
    let (Some("compatible"), Some(msie)) = (section.comment(0), section.comment(1)) else {
        return;
    };
    let Some(msie_version) = msie.strip_prefix("MSIE") else {
        return;
    };

    ua.engine = "Trident";
    ua.name = "Internet Explorer";

    // for IE 8 through 10 the Trident token is more accurate than the MSIE one
    let trident = section
        .comments()
        .iter()
        .find_map(|&comment| comment.strip_prefix("Trident/"));
    ua.version = match trident {
        Some("4.0") => "8.0",
        Some("5.0") => "9.0",
        Some("6.0") => "10.0",
        _ => msie_version.trim(),
    };
}
