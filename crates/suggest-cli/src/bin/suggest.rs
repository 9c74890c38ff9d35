use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use suggest_cli::args::CliArgs;
use suggest_cli::driver::{self, EXIT_SUCCESS};

fn main() -> Result<()> {
    // SUGGEST_LOG / RUST_LOG, SUGGEST_LOG_FORMAT=text|tree|json
    suggest_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = std::io::stdout().is_terminal();
    let outcome = driver::execute(&args, color)?;

    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
    if outcome.exit_code != EXIT_SUCCESS {
        std::process::exit(outcome.exit_code);
    }
    Ok(())
}
