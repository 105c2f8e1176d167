//! Error types and utilities for agentsniff.
//!
//! Parsing a `User-Agent` never fails, so errors only show up at the edges:
//! parsing enum values from strings, reading input in the cli, and so on.
//! The [`BoxError`] type is used for cases where it is usually not that
//! important what specific error type is returned, but rather that an error occurred.
//!
//! Use [`ErrorContext`] to attach a human readable context to such an error
//! and [`OpaqueError`] to hide a concrete error type behind a single named type.
//!
//! # agentsniff
//!
//! Crate used by the end-user `agentsniff` crate and its sub crates alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

mod ext;
pub use ext::{ErrorContext, OpaqueError};
