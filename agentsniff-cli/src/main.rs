//! entrypoint for agentsniff-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use agentsniff::error::BoxError;
use clap::{ArgAction, Parser, Subcommand};

pub mod cmd;
use self::cmd::{parse, tokens};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "agentsniff")]
#[command(bin_name = "agentsniff")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,

    /// raise the default log level: -v for debug, -vv for trace
    /// (RUST_LOG env takes precedence)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    /// format of the logs written to stderr: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: trace::LogFormat,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Parse(parse::CliCommandParse),
    Tokens(tokens::CliCommandTokens),
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxError> {
    trace::init_tracing(cli.log_format, trace::default_directive(cli.verbose))?;

    match cli.cmds {
        CliCommands::Parse(cfg) => parse::run(cfg),
        CliCommands::Tokens(cfg) => tokens::run(cfg),
    }
}
