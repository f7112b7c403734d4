// src/config.rs
use std::path::PathBuf;

use bard_lines_domain::options::OutputFormat;
use bard_lines_shared_kernel::{PresentationError, PresentationResult};
use log::LevelFilter;

use crate::cli::Args;

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub folder: PathBuf,
    pub extension: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("plays"),
            extension: ".txt".to_string(),
            format: OutputFormat::Text,
            output: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl TryFrom<Args> for RunConfig {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        validate_extension(&args.ext)?;
        Ok(Self {
            folder: args.dir,
            extension: args.ext,
            format: args.format.into(),
            output: args.output,
            log_level: log_level(args.verbose, args.quiet),
        })
    }
}

/// An extension is matched against bare file names, so it cannot name a path.
fn validate_extension(ext: &str) -> PresentationResult<()> {
    if ext.contains(['/', '\\']) {
        return Err(PresentationError::InvalidValue {
            flag: "--ext".to_string(),
            value: ext.to_string(),
            reason: "must not contain a path separator".to_string(),
        });
    }
    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
