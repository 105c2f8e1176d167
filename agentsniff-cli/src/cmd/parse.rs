//! agentsniff parse command

use agentsniff::{
    error::{BoxError, ErrorContext as _, OpaqueError},
    ua::{DeviceKind, OsInfo, UserAgent},
};
use clap::Args;
use serde::Serialize;
use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

#[derive(Debug, Args)]
/// parse User-Agent values into their browser, os and device classification
pub struct CliCommandParse {
    /// User-Agent values to parse
    ///
    /// When none is given, or for `-`, they are read from stdin, one per line.
    user_agents: Vec<String>,

    #[arg(long, short = 'f', default_value = "text")]
    /// output format: text or json (one object per line)
    format: OutputFormat,

    #[arg(long)]
    /// include the os name and version split from the os
    os_info: bool,

    #[arg(long)]
    /// indent json output
    pretty: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Output format of the parse command.
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Text, Self::Json]
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpaqueError::from_display(format!("invalid output format: {s}")))
    }
}

/// run the agentsniff parse command
pub fn run(cfg: CliCommandParse) -> Result<(), BoxError> {
    let writer = RecordWriter {
        format: cfg.format,
        os_info: cfg.os_info,
        pretty: cfg.pretty,
    };

    let mut user_agents = cfg.user_agents;
    if user_agents.is_empty() {
        user_agents.push("-".to_owned());
    }

    let mut out = io::stdout().lock();
    for arg in user_agents {
        if arg == "-" {
            writer.write_lines(&mut out, io::stdin().lock())?;
        } else {
            writer.write(&mut out, &UserAgent::new(arg))?;
        }
    }
    out.flush().context("flush stdout")?;

    Ok(())
}

#[derive(Debug, Clone)]
struct RecordWriter {
    format: OutputFormat,
    os_info: bool,
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    user_agent: &'a UserAgent,
    device: DeviceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_info: Option<OsInfo>,
}

impl RecordWriter {
    /// Parse and write every non-blank line of the input.
    fn write_lines(&self, w: &mut impl Write, input: impl BufRead) -> Result<usize, BoxError> {
        let mut count = 0;
        for line in input.lines() {
            let line = line.context("read user agent line")?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            self.write(w, &UserAgent::new(line))?;
            count += 1;
        }
        tracing::debug!(count, "parsed user agents from input lines");
        Ok(count)
    }

    fn write(&self, w: &mut impl Write, ua: &UserAgent) -> Result<(), BoxError> {
        tracing::debug!(
            user_agent.original = %ua,
            user_agent.device = %ua.device(),
            "user agent parsed"
        );
        match self.format {
            OutputFormat::Text => self.write_text(w, ua).context("write text record")?,
            OutputFormat::Json => self.write_json(w, ua)?,
        }
        Ok(())
    }

    fn write_text(&self, w: &mut impl Write, ua: &UserAgent) -> io::Result<()> {
        let (browser, browser_version) = ua.browser();
        let (engine, engine_version) = ua.engine();

        write_field(w, "ua", ua.header_str())?;
        write_field(w, "mozilla", ua.mozilla())?;
        write_field(w, "platform", ua.platform())?;
        write_field(w, "os", ua.os())?;
        write_field(w, "localization", ua.localization())?;
        write_field(w, "browser", format!("{browser} {browser_version}").trim())?;
        write_field(w, "engine", format!("{engine} {engine_version}").trim())?;
        write_field(w, "bot", ua.bot())?;
        write_field(w, "mobile", ua.mobile())?;
        write_field(w, "device", ua.device())?;
        if self.os_info {
            let info = ua.os_info();
            write_field(w, "os name", info.name)?;
            write_field(w, "os version", info.version)?;
        }
        writeln!(w)
    }

    fn write_json(&self, w: &mut impl Write, ua: &UserAgent) -> Result<(), BoxError> {
        let record = JsonRecord {
            user_agent: ua,
            device: ua.device(),
            os_info: self.os_info.then(|| ua.os_info()),
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *w, &record)
        } else {
            serde_json::to_writer(&mut *w, &record)
        }
        .context("serialize user agent as json")?;
        writeln!(w).context("write json record separator")?;
        Ok(())
    }
}

fn write_field(w: &mut impl Write, key: &str, value: impl fmt::Display) -> io::Result<()> {
    let value = value.to_string();
    if value.is_empty() {
        writeln!(w, "{key}:")
    } else {
        writeln!(w, "{key}: {value}")
    }
}
