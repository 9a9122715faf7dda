use std::process::ExitCode;

use assetdesk_cli::cli::{self, Cli};
use assetdesk_cli::logging;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    match cli::run(&cli) {
        Ok(frame) => {
            println!("{frame}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
