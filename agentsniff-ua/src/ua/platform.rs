//! Platform, operating system and localization detection.
//!
//! All rules interpret the comment of the first section,
//! with the layout picked by the already detected engine.

use super::{EngineKind, Section, parse::Staging};

/// Normalize the name of an operating system.
///
/// Only Windows NT versions are mapped to their release name,
/// any other name is returned unchanged.
///
/// ```
/// use agentsniff_ua::normalize_os;
///
/// assert_eq!(normalize_os("Windows NT 6.1"), "Windows 7");
/// assert_eq!(normalize_os("Windows NT 4.0"), "Windows NT 4.0");
/// assert_eq!(normalize_os("Linux x86_64"), "Linux x86_64");
/// ```
#[must_use]
pub fn normalize_os(name: &str) -> &str {
    let mut parts = name.splitn(3, ' ');
    let (Some(_), Some("NT"), Some(version)) = (parts.next(), parts.next(), parts.next()) else {
        return name;
    };
    match version {
        "5.0" => "Windows 2000",
        "5.01" => "Windows 2000, Service Pack 1 (SP1)",
        "5.1" => "Windows XP",
        "5.2" => "Windows XP x64 Edition",
        "6.0" => "Windows Vista",
        "6.1" => "Windows 7",
        "6.2" => "Windows 8",
        "6.3" => "Windows 8.1",
        "10.0" => "Windows 10",
        _ => name,
    }
}

/// Platform as announced by the first comment entry.
fn platform_from_comment<'a>(comment: &[&'a str]) -> &'a str {
    match comment.first().copied() {
        None | Some("compatible") => "",
        Some("BB10") => "BlackBerry",
        Some(entry) if entry.starts_with("Windows") => "Windows",
        Some(entry) if entry.starts_with("Symbian") => "Symbian",
        Some(entry) if entry.starts_with("webOS") => "webOS",
        Some(entry) => entry,
    }
}

/// Detect platform, os and localization from the first section.
pub(super) fn detect_os<'a>(ua: &mut Staging<'a>, section: &Section<'a>) {
    let comment = section.comments();

    let kind = match section.name() {
        "Mozilla" => {
            ua.platform = platform_from_comment(comment);
            if ua.platform == "Windows" {
                if let Some(&first) = comment.first() {
                    ua.os = normalize_os(first);
                }
            }
            if ua.engine.is_empty() {
                ua.undecided = true;
                return;
            }
            match EngineKind::from_engine_name(ua.engine) {
                kind @ (EngineKind::Gecko | EngineKind::AppleWebKit | EngineKind::Trident) => kind,
                _ => EngineKind::Unknown,
            }
        }
        "Opera" => EngineKind::Presto,
        "Dalvik" => EngineKind::Dalvik,
        _ => {
            ua.undecided = true;
            return;
        }
    };

    tracing::trace!(
        user_agent.engine = %kind,
        user_agent.platform = ua.platform,
        "user agent: detect os using engine layout"
    );

    match kind {
        EngineKind::Gecko => gecko(ua, comment),
        EngineKind::AppleWebKit => webkit(ua, comment),
        EngineKind::Trident => trident(ua, comment),
        EngineKind::Presto => presto(ua, comment),
        EngineKind::Dalvik => dalvik(ua, comment),
        EngineKind::EdgeHtml | EngineKind::Unknown => (),
    }
}

/// WebKit based browsers, including most mobile ones.
fn webkit<'a>(ua: &mut Staging<'a>, comment: &[&'a str]) {
    match ua.platform {
        "webOS" => {
            ua.name = ua.platform;
            ua.os = "Palm";
            if let Some(&localization) = comment.get(2) {
                ua.localization = localization;
            }
            ua.mark_mobile();
        }
        "Symbian" => {
            ua.mark_mobile();
            ua.name = ua.platform;
            if let Some(&os) = comment.first() {
                ua.os = os;
            }
        }
        "Linux" => {
            if ua.name == "Safari" {
                ua.name = "Android";
            }
            let mut mobile = true;
            match (comment.get(1).copied(), comment.get(2).copied()) {
                (Some("U"), Some(os)) => ua.os = os,
                (Some("U"), None) => {
                    // too little info to tell, but an earlier mobile mark stays
                    mobile = false;
                    ua.os = comment.first().copied().unwrap_or_default();
                }
                (Some(os), _) => ua.os = os,
                (None, _) => (),
            }
            if mobile {
                ua.mark_mobile();
            }
            if let Some(&localization) = comment.get(3) {
                ua.localization = localization;
            } else if comment.len() == 3 {
                ua.googlebot();
            }
        }
        _ => {
            let Some(&first) = comment.first() else {
                return;
            };
            if let Some(&localization) = comment.get(3) {
                ua.localization = localization;
            }
            if first.starts_with("Windows NT") {
                ua.os = normalize_os(first);
            } else if comment.len() < 2 {
                ua.localization = first;
            } else if comment.len() < 3 {
                if !ua.googlebot() {
                    ua.os = comment.get(1).copied().map(normalize_os).unwrap_or_default();
                }
            } else if let Some(&os) = comment.get(2) {
                ua.os = normalize_os(os);
            }
            if ua.platform == "BlackBerry" {
                ua.name = ua.platform;
                if ua.os == "Touch" {
                    ua.os = ua.platform;
                }
            }
        }
    }
}

/// Firefox and other Gecko based browsers.
fn gecko<'a>(ua: &mut Staging<'a>, comment: &[&'a str]) {
    let (Some(&first), Some(&second)) = (comment.first(), comment.get(1)) else {
        return;
    };

    if second == "U" {
        ua.os = normalize_os(comment.get(2).copied().unwrap_or(second));
    } else if ua.platform == "Android" {
        ua.mark_mobile();
        ua.os = ua.platform;
        ua.platform = normalize_os(second);
    } else if first == "Mobile" || first == "Tablet" {
        ua.mark_mobile();
        ua.os = "FirefoxOS";
    } else if ua.os.is_empty() {
        ua.os = normalize_os(second);
    }

    // e.g. Firefox on Ubuntu puts its revision here
    if let Some(&localization) = comment.get(3) {
        if !localization.starts_with("rv:") {
            ua.localization = localization;
        }
    }
}

/// Internet Explorer, which only runs on Windows.
fn trident<'a>(ua: &mut Staging<'a>, comment: &[&'a str]) {
    ua.platform = "Windows";

    // IE11 already got its os from the platform
    if ua.os.is_empty() {
        ua.os = comment
            .get(2)
            .copied()
            .map(normalize_os)
            .unwrap_or("Windows NT 4.0");
    }

    if comment.iter().any(|entry| entry.starts_with("IEMobile")) {
        ua.mark_mobile();
    }
}

/// Opera up to version 12, announcing itself as `Opera/x.y`.
fn presto<'a>(ua: &mut Staging<'a>, comment: &[&'a str]) {
    let Some(&first) = comment.first() else {
        return;
    };

    if first.starts_with("Windows") {
        ua.platform = "Windows";
        ua.os = normalize_os(first);
        match (comment.get(2).copied(), comment.get(3).copied()) {
            (Some(mra), Some(localization)) if mra.starts_with("MRA") => {
                ua.localization = localization;
            }
            (Some(localization), _) => ua.localization = localization,
            (None, _) => (),
        }
    } else {
        if first.starts_with("Android") {
            ua.mark_mobile();
        }
        ua.platform = first;
        match comment.get(1) {
            Some(&os) => {
                ua.os = os;
                if let Some(&localization) = comment.get(3) {
                    ua.localization = localization;
                }
            }
            None => ua.os = first,
        }
    }
}

/// Android apps using the Dalvik VM directly.
fn dalvik<'a>(ua: &mut Staging<'a>, comment: &[&'a str]) {
    let Some(&first) = comment.first() else {
        return;
    };
    if first.starts_with("Linux") {
        ua.platform = first;
        if let Some(&os) = comment.get(2) {
            ua.os = os;
        }
        ua.mark_mobile();
    }
}
