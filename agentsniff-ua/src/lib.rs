//! User Agent (UA) parser and classifier.
//!
//! This crate provides a parser ([`UserAgent::new`]) for the value of
//! a `User-Agent` http header. It extracts:
//!
//! - the browser name and version (e.g. `Chrome` `29.0.1541.0`);
//! - the rendering engine and its version (e.g. `AppleWebKit` `537.36`);
//! - the platform, operating system and localization advertised in the first comment;
//! - whether the agent is a bot and whether it runs on a mobile device.
//!
//! ```
//! use agentsniff_ua::UserAgent;
//!
//! let ua = UserAgent::new("Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/29.0.1541.0 Safari/537.36");
//! assert_eq!(ua.browser(), ("Chrome", "29.0.1541.0"));
//! assert_eq!(ua.engine(), ("AppleWebKit", "537.36"));
//! assert_eq!(ua.os(), "Windows 7");
//! assert!(!ua.mobile());
//! assert!(!ua.bot());
//! ```
//!
//! # Remarks
//!
//! User Agents follow no single grammar. Each vendor emits its own dialect,
//! so the classification is an ordered chain of heuristics rather than a verified grammar:
//!
//! - it never fails: malformed input degrades to (partially) empty fields;
//! - it is best-effort: adversarial strings can be classified wrongly;
//! - it has no signature database: all rules are baked into this crate.
//!
//! Anything that cannot be matched by the browser and platform rules is handed
//! to a bot classifier which decides between a bot and a "weird" browser.
//!
//! # Features
//!
//! - `http`: construct a [`UserAgent`] directly from an `http::HeaderMap` or `http::HeaderValue`.
//!
//! # agentsniff
//!
//! Crate used by the end-user `agentsniff` crate and the `agentsniff` cli alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod ua;
pub use ua::*;
