//! End-to-end tests for the `agentsniff` binary.

mod utils;

mod help;
mod parse;
mod tokens;
