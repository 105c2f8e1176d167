use super::{OsInfo, parse_http_user_agent_header};
use agentsniff_error::OpaqueError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

/// User Agent (UA) information.
///
/// See [the crate level documentation](crate) for more information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgent {
    #[serde(rename = "ua")]
    pub(super) header: Arc<str>,
    pub(super) mozilla: String,
    pub(super) platform: String,
    pub(super) os: String,
    pub(super) localization: String,
    pub(super) browser: Browser,
    pub(super) bot: bool,
    pub(super) mobile: bool,
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl Default for UserAgent {
    fn default() -> Self {
        Self {
            header: Arc::from(""),
            mozilla: String::new(),
            platform: String::new(),
            os: String::new(),
            localization: String::new(),
            browser: Browser::default(),
            bot: false,
            mobile: false,
        }
    }
}

/// Browser and rendering engine as detected in a [`UserAgent`].
///
/// Empty strings mean that the property could not be detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Browser {
    /// The name of the rendering engine, e.g. `AppleWebKit`.
    pub engine: String,
    /// The version of the rendering engine.
    pub engine_version: String,
    /// The name of the browser, e.g. `Chrome`.
    pub name: String,
    /// The version of the browser.
    pub version: String,
}

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` (header) value.
    ///
    /// Parsing never fails: properties which could not be
    /// detected are left empty.
    pub fn new(header: impl Into<Arc<str>>) -> Self {
        parse_http_user_agent_header(header.into())
    }

    /// Parse another `User-Agent` (header) value into this [`UserAgent`].
    ///
    /// Nothing of the previously parsed value is preserved.
    pub fn parse(&mut self, header: impl Into<Arc<str>>) -> &mut Self {
        *self = Self::new(header);
        self
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgent`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the Mozilla version the header starts with,
    /// e.g. `5.0` for `Mozilla/5.0 (...) ...`.
    #[must_use]
    pub fn mozilla(&self) -> &str {
        &self.mozilla
    }

    /// returns true if the [`UserAgent`] is classified as a bot.
    #[must_use]
    pub fn bot(&self) -> bool {
        self.bot
    }

    /// returns true if the [`UserAgent`] is classified as a mobile device.
    #[must_use]
    pub fn mobile(&self) -> bool {
        self.mobile
    }

    /// returns the platform, e.g. `Windows`, `X11` or `Macintosh`.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// returns the full name of the operating system, e.g. `Windows 7`.
    ///
    /// Use [`UserAgent::os_info`] for a name and version split.
    #[must_use]
    pub fn os(&self) -> &str {
        &self.os
    }

    /// returns the localization, e.g. `en-US`.
    #[must_use]
    pub fn localization(&self) -> &str {
        &self.localization
    }

    /// returns the name and version of the rendering engine.
    #[must_use]
    pub fn engine(&self) -> (&str, &str) {
        (&self.browser.engine, &self.browser.engine_version)
    }

    /// returns the name and version of the browser.
    #[must_use]
    pub fn browser(&self) -> (&str, &str) {
        (&self.browser.name, &self.browser.version)
    }

    /// returns all [`Browser`] information at once.
    #[must_use]
    pub fn browser_info(&self) -> &Browser {
        &self.browser
    }

    /// returns the [`EngineKind`] of the detected rendering engine.
    ///
    /// A `Dalvik` agent announces no engine, so it maps to
    /// [`EngineKind::Unknown`]: [`EngineKind::Dalvik`] is only
    /// the layout used to read its platform and os.
    #[must_use]
    pub fn engine_kind(&self) -> EngineKind {
        EngineKind::from_engine_name(&self.browser.engine)
    }

    /// returns the [`DeviceKind`] on which the [`UserAgent`] operates.
    #[must_use]
    pub fn device(&self) -> DeviceKind {
        if self.bot {
            DeviceKind::Bot
        } else if self.mobile {
            DeviceKind::Mobile
        } else {
            DeviceKind::Desktop
        }
    }

    /// returns the normalized [`OsInfo`], computed from [`UserAgent::os`].
    #[must_use]
    pub fn os_info(&self) -> OsInfo {
        OsInfo::from_full_name(&self.os)
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Rendering engine layouts known to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Firefox and derivatives
    Gecko,
    /// Safari, Chromium and most mobile browsers
    AppleWebKit,
    /// Internet Explorer
    Trident,
    /// Legacy (pre-Chromium) Edge
    EdgeHtml,
    /// Legacy (pre-Blink) Opera
    Presto,
    /// Android's Dalvik VM, no browser attached
    ///
    /// Only used as os layout: [`UserAgent::engine_kind`]
    /// never returns it, as Dalvik agents have no engine.
    Dalvik,
    /// Any other or no engine at all
    Unknown,
}

impl EngineKind {
    const ALL: [Self; 7] = [
        Self::Gecko,
        Self::AppleWebKit,
        Self::Trident,
        Self::EdgeHtml,
        Self::Presto,
        Self::Dalvik,
        Self::Unknown,
    ];

    /// Map an engine name, as found in a `User-Agent`, to its [`EngineKind`].
    ///
    /// Unlike [`FromStr`] this is an exact match and never fails.
    #[must_use]
    pub fn from_engine_name(name: &str) -> Self {
        match name {
            "Gecko" => Self::Gecko,
            "AppleWebKit" => Self::AppleWebKit,
            "Trident" => Self::Trident,
            "EdgeHTML" => Self::EdgeHtml,
            "Presto" => Self::Presto,
            "Dalvik" => Self::Dalvik,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gecko => "Gecko",
            Self::AppleWebKit => "AppleWebKit",
            Self::Trident => "Trident",
            Self::EdgeHtml => "EdgeHTML",
            Self::Presto => "Presto",
            Self::Dalvik => "Dalvik",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpaqueError::from_display(format!("invalid engine kind: {s}")))
    }
}

impl Serialize for EngineKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EngineKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Device on which the [`UserAgent`] operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Personal Computers
    Desktop,
    /// Phones, Tablets and other mobile devices
    Mobile,
    /// Crawlers and other automated agents
    Bot,
}

impl DeviceKind {
    const ALL: [Self; 3] = [Self::Desktop, Self::Mobile, Self::Bot];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
            Self::Bot => "Bot",
        }
    }
}

impl FromStr for DeviceKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpaqueError::from_display(format!("invalid device: {s}")))
    }
}

impl Serialize for DeviceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
