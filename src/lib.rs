//! 🕵️ agentsniff is a best-effort parser and classifier for the `User-Agent` http header.
//!
//! Give it the opaque header text and get back what can be told from it:
//!
//! | category | support list |
//! |-|-|
//! | ✅ browsers | ✅ Chrome ⸱ ✅ Chromium ⸱ ✅ Safari ⸱ ✅ Firefox ⸱ ✅ Edge (EdgeHTML) ⸱ ✅ Opera (Presto and Blink) ⸱ ✅ Internet Explorer 6-11 |
//! | ✅ engines | ✅ AppleWebKit ⸱ ✅ Gecko ⸱ ✅ Trident ⸱ ✅ EdgeHTML ⸱ ✅ Presto |
//! | ✅ platforms | ✅ Windows ⸱ ✅ Macintosh ⸱ ✅ X11 / Linux ⸱ ✅ Android ⸱ ✅ iOS ⸱ ✅ BlackBerry ⸱ ✅ webOS ⸱ ✅ Symbian ⸱ ✅ Firefox OS ⸱ ✅ Dalvik |
//! | ✅ classification | ✅ [mobile](crate::ua::UserAgent::mobile) ⸱ ✅ [bot](crate::ua::UserAgent::bot) ⸱ ✅ [device](crate::ua::DeviceKind) |
//! | ✅ os info | ✅ [Windows NT release names](crate::ua::normalize_os) ⸱ ✅ [name and version](crate::ua::OsInfo) |
//!
//! ```
//! use agentsniff::ua::UserAgent;
//!
//! let ua = UserAgent::new("Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko");
//! assert_eq!(ua.engine(), ("Trident", ""));
//! assert_eq!(ua.browser(), ("Internet Explorer", "11.0"));
//! assert_eq!(ua.os_info().version, "7");
//! ```
//!
//! The parser never fails and never does any I/O: it is up to you
//! to get the header value (e.g. using the `http` feature).
//! Anything it cannot make sense of is left empty.
//!
//! ## ⌨️ | `agentsniff` binary
//!
//! The `agentsniff` binary allows you to parse `User-Agent` values from the command line,
//! as text or (ND)JSON. Install it using `cargo install agentsniff-cli`.
//!
//! ## 🧪 | Features
//!
//! - `ua` (default): the [`ua`] module;
//! - `http`: construct a `UserAgent` from `http` headers.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::agentsniff_error as error;

#[cfg(feature = "ua")]
#[cfg_attr(docsrs, doc(cfg(feature = "ua")))]
pub mod ua {
    //! User Agent (UA) parsing and classification.
    //!
    //! See [`UserAgent`] for the entry point.

    #[doc(inline)]
    pub use ::agentsniff_ua::*;
}
