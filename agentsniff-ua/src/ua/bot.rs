//! Bot versus weird browser classification,
//! for agents the engine and os layouts could not make sense of.

use super::{Section, parse::Staging, split_product};
use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "constant pattern")]
static BOT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bot|crawler|sp(i|y)der|search|worm|fetch|nutch)").expect("valid bot regex")
});

#[expect(clippy::expect_used, reason = "constant pattern")]
static BOT_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http://.+\.[A-Za-z0-9_]+").expect("valid bot site regex"));

/// Classify an undecided agent as either a bot or a weird browser.
pub(super) fn check_bot<'a>(ua: &mut Staging<'a>, sections: &[Section<'a>]) {
    match sections {
        [section] if section.name() != "Mozilla" => check_single(ua, section),
        _ => {
            match sections
                .iter()
                .find_map(|section| bot_from_site(section.comments()))
            {
                Some(site) => {
                    let (name, version) = split_product(site);
                    ua.set_simple(name, version, true);
                }
                None => fix_other(ua, sections),
            }
        }
    }

    if !ua.bot && ua.ua.contains("Googlebot") {
        let (name, version) = googlebot_identity(sections);
        tracing::trace!(
            user_agent.original = ua.ua,
            "user agent classified as Googlebot"
        );
        ua.set_simple(name, version, true);
    }
}

/// A lone non-Mozilla product, e.g. `curl/7.64.1`.
fn check_single<'a>(ua: &mut Staging<'a>, section: &Section<'a>) {
    ua.mozilla = "";

    if BOT_NAME.is_match(section.name()) {
        ua.set_simple(section.name(), "", true);
    } else if bot_from_site(section.comments()).is_some() {
        ua.set_simple(section.name(), section.version(), true);
    } else {
        ua.set_simple(section.name(), section.version(), false);
    }
}

/// Use the first product as browser identity.
fn fix_other<'a>(ua: &mut Staging<'a>, sections: &[Section<'a>]) {
    if let Some(first) = sections.first() {
        ua.name = first.name();
        ua.version = first.version();
        ua.mozilla = "";
    }
}

/// Bot name taken from a website found in the comment.
///
/// Long comments have the site as third entry, with the name
/// in the entry before it. Short comments have the site as first entry,
/// in which case the site itself is used as name.
fn bot_from_site<'a>(comment: &[&'a str]) -> Option<&'a str> {
    let name = if comment.len() < 3 {
        BOT_SITE.find(comment.first().copied()?)?.as_str()
    } else {
        BOT_SITE.find(comment.get(2).copied()?)?;
        comment.get(1).copied()?.trim()
    };
    (!name.is_empty()).then_some(name)
}

/// Name and version of the first `Googlebot` token,
/// searched for in product names first and comments second.
fn googlebot_identity<'a>(sections: &[Section<'a>]) -> (&'a str, &'a str) {
    sections
        .iter()
        .find(|section| section.name().starts_with("Googlebot"))
        .map(|section| (section.name(), section.version()))
        .or_else(|| {
            sections
                .iter()
                .flat_map(|section| section.comments().iter().copied())
                .map(str::trim)
                .find(|entry| entry.starts_with("Googlebot"))
                .map(split_product)
        })
        .unwrap_or(("Googlebot", ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections;

    fn classify(ua: &str) -> Staging<'_> {
        let sections: Vec<_> = sections(ua).collect();
        let mut staging = Staging {
            ua,
            mozilla: sections.first().map(|s| s.version()).unwrap_or_default(),
            ..Default::default()
        };
        check_bot(&mut staging, &sections);
        staging
    }

    #[test]
    fn test_bot_from_site() {
        for (comment, expected) in [
            (vec![], None),
            (
                vec!["+http://www.google.com/bot.html"],
                Some("http://www.google.com/bot.html"),
            ),
            (vec!["compatible", "Something"], None),
            (
                vec!["compatible", "bingbot/2.0", "+http://www.bing.com/bingbot.htm"],
                Some("bingbot/2.0"),
            ),
            (
                vec!["compatible", " Foo ", "http://foo.example.org"],
                Some("Foo"),
            ),
            (vec!["compatible", "", "http://foo.example.org"], None),
            (vec!["http://localhost"], None),
            (vec!["https://www.example.com"], None),
        ] {
            assert_eq!(bot_from_site(&comment), expected, "test_case: {comment:?}");
        }
    }

    #[test]
    fn test_check_bot_single_section() {
        for (ua, expected_browser, expected_bot) in [
            ("Googlebot/2.1 (+http://www.google.com/bot.html)", ("Googlebot", ""), true),
            ("Baiduspider/2.0 (+http://www.baidu.com/search/spider.html)", ("Baiduspider", ""), true),
            ("msnbot-media/1.1 (+http://search.msn.com/msnbot.htm)", ("msnbot-media", ""), true),
            ("Twiceler-0.9 (http://www.cuil.com/twiceler/robot.html)", ("Twiceler-0.9", ""), true),
            ("curl/7.64.1", ("curl", "7.64.1"), false),
            ("Wget/1.20.3 (linux-gnu)", ("Wget", "1.20.3"), false),
            ("python-requests/2.31.0", ("python-requests", "2.31.0"), false),
            ("Links (2.1pre15; FreeBSD 5.4-STABLE i386; 158x58)", ("Links", ""), false),
        ] {
            let staging = classify(ua);
            assert_eq!((staging.name, staging.version), expected_browser, "test_case: '{ua}'");
            assert_eq!(staging.bot, expected_bot, "test_case: '{ua}'");
            assert_eq!(staging.mozilla, "", "test_case: '{ua}'");
        }
    }

    #[test]
    fn test_check_bot_multi_section() {
        for (ua, expected_browser, expected_bot, expected_mozilla) in [
            (
                "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
                ("bingbot", "2.0"),
                true,
                "5.0",
            ),
            (
                "Mozilla/5.0 (compatible; Yahoo! Slurp; http://help.yahoo.com/help/us/ysearch/slurp)",
                ("Yahoo! Slurp", ""),
                true,
                "5.0",
            ),
            (
                "Mozilla/5.0 (compatible; Something)",
                ("Mozilla", "5.0"),
                false,
                "",
            ),
            (
                "Mozilla/5.0 (Windows NT 10.0; Win64",
                ("Mozilla", "5.0"),
                false,
                "",
            ),
        ] {
            let staging = classify(ua);
            assert_eq!((staging.name, staging.version), expected_browser, "test_case: '{ua}'");
            assert_eq!(staging.bot, expected_bot, "test_case: '{ua}'");
            assert_eq!(staging.mozilla, expected_mozilla, "test_case: '{ua}'");
        }
    }

    #[test]
    fn test_check_bot_googlebot_fallback() {
        let staging = classify(
            "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; Googlebot/2.1; +http://www.google.com/bot.html) Chrome/120.0.6099.216 Safari/537.36",
        );
        assert!(staging.bot);
        assert_eq!((staging.name, staging.version), ("Googlebot", "2.1"));
        assert_eq!(staging.mozilla, "");

        let staging = classify("NotGooglebotAtAll");
        assert!(staging.bot);

        let staging = classify("Foo/1.0 (x) Bar/2.0 (thisGooglebot)");
        assert!(staging.bot);
        assert_eq!((staging.name, staging.version), ("Googlebot", ""));
    }

    #[test]
    fn test_googlebot_identity() {
        for (ua, expected) in [
            ("Googlebot-Image/1.0 Foo", ("Googlebot-Image", "1.0")),
            (
                "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
                ("Googlebot", "2.1"),
            ),
            ("Foo (Googlebot)", ("Googlebot", "")),
            ("Foo (bar)", ("Googlebot", "")),
        ] {
            let sections: Vec<_> = sections(ua).collect();
            assert_eq!(googlebot_identity(&sections), expected, "test_case: '{ua}'");
        }
    }
}
