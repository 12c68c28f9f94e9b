#![forbid(unsafe_code)]
//! Computes base58check version bytes from the command line

use b58prefix::cli::{init_logging, run, Cli};
use clap::Parser;
use colored::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.to_string().red().bold());
            ExitCode::from(2)
        }
    }
}
