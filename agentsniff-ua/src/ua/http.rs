use super::UserAgent;
use http::{HeaderMap, HeaderValue, header::USER_AGENT};

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` [`HeaderValue`].
    ///
    /// Header values which are not valid UTF-8 are decoded lossy.
    #[must_use]
    pub fn from_header_value(value: &HeaderValue) -> Self {
        match value.to_str() {
            Ok(s) => Self::new(s),
            Err(_) => Self::new(String::from_utf8_lossy(value.as_bytes())),
        }
    }

    /// Create a new [`UserAgent`] from the `User-Agent` header
    /// found in the given [`HeaderMap`], if any.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(USER_AGENT);
        if value.is_none() {
            tracing::trace!("no user agent header present");
        }
        value.map(Self::from_header_value)
    }
}
