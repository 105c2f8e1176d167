//! agentsniff tokens command

use agentsniff::{
    error::{BoxError, ErrorContext as _},
    ua::sections,
};
use clap::Args;
use std::io::{self, Write};

#[derive(Debug, Args)]
/// print the sections a User-Agent is tokenized into,
/// one per line as name, version and comment entries
pub struct CliCommandTokens {
    /// the User-Agent to tokenize
    user_agent: String,
}

/// run the agentsniff tokens command
pub fn run(cfg: CliCommandTokens) -> Result<(), BoxError> {
    let CliCommandTokens { user_agent } = cfg;

    let mut out = io::stdout().lock();
    let count = write_sections(&mut out, &user_agent).context("write sections to stdout")?;
    out.flush().context("flush stdout")?;

    tracing::debug!(user_agent.original = %user_agent, count, "user agent tokenized");
    Ok(())
}

fn write_sections(w: &mut impl Write, ua: &str) -> io::Result<usize> {
    let mut count = 0;
    for section in sections(ua) {
        writeln!(
            w,
            "{}\t{}\t{:?}",
            section.name(),
            section.version(),
            section.comments()
        )?;
        count += 1;
    }
    Ok(count)
}
