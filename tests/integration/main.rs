//! Integration tests for the `agentsniff` facade crate.

mod parse;
mod serialize;

#[cfg(feature = "http")]
mod headers;
