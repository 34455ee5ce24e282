use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use textmod::{RunConfig, run};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// File to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// File to write the rewritten text to
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

/// Logs go to stderr; only warnings and errors are shown.
const LOG_LEVEL: &str = "warn";

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_LEVEL))
        .with_writer(std::io::stderr)
        .init();

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let config = RunConfig::new(args.input, args.output);
    run(&config)?;
    println!("Text modification complete.");
    Ok(())
}
