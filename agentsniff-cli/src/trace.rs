use agentsniff::error::{BoxError, ErrorContext as _, OpaqueError};
use std::{fmt, io::IsTerminal as _, str::FromStr};
use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter},
    fmt as fmt_layer,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Format of the logs written to stderr.
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Text, Self::Json]
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpaqueError::from_display(format!("invalid log format: {s}")))
    }
}

/// Default log level directive for the given verbosity.
pub fn default_directive(verbose: u8) -> Directive {
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
    .into()
}

pub fn init_tracing(
    format: LogFormat,
    default_directive: impl Into<Directive>,
) -> Result<(), BoxError> {
    match format {
        LogFormat::Text => init_text(default_directive),
        LogFormat::Json => init_json(default_directive),
    }
}

fn env_filter(default_directive: impl Into<Directive>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_directive.into())
        .from_env_lossy()
}

fn init_text(default_directive: impl Into<Directive>) -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            fmt_layer::layer()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(env_filter(default_directive))
        .try_init()
        .context("try init (text) tracing subscriber")?;

    Ok(())
}

fn init_json(default_directive: impl Into<Directive>) -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            fmt_layer::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .json()
                .flatten_event(true),
        )
        .with(env_filter(default_directive))
        .try_init()
        .context("try init (json) tracing subscriber")?;

    Ok(())
}
