use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

pub(super) type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug)]
/// Wrapper around the `agentsniff` binary, built on demand.
pub(super) struct AgentSniff {
    command: Command,
}

impl AgentSniff {
    pub(super) fn new() -> Result<Self> {
        let command = escargot::CargoBuild::new()
            .package("agentsniff-cli")
            .bin("agentsniff")
            .target_dir("./target/")
            .run()?
            .command();
        Ok(Self { command })
    }

    /// Run with the given arguments, returning stdout on success.
    pub(super) fn run(args: &[&str]) -> Result<String> {
        Self::run_with_stdin(args, "")
    }

    /// Run with the given arguments and stdin, returning stdout on success.
    pub(super) fn run_with_stdin(args: &[&str], stdin: &str) -> Result<String> {
        let output = Self::new()?.output(args, stdin)?;
        if !output.status.success() {
            return Err(format!(
                "agentsniff exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )
            .into());
        }
        Ok(String::from_utf8(output.stdout)?)
    }

    /// Run with the given arguments, returning the raw process output.
    pub(super) fn output(mut self, args: &[&str], stdin: &str) -> Result<Output> {
        let mut child = self
            .command
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut input) = child.stdin.take() {
            input.write_all(stdin.as_bytes())?;
        }

        Ok(child.wait_with_output()?)
    }
}
