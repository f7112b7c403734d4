use std::process::ExitCode;

use bard_lines::{app, cli::Args, config::RunConfig, logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match RunConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::from(2);
        }
    };
    logging::init(config.log_level);

    match app::run(&config) {
        Ok(summary) => {
            log::debug!("printed {} of {} documents", summary.printed, summary.documents);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
