//! Logger setup.

use std::fs::{self, File};

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::error::CliError;
use crate::paths;

/// Level written to the log file.
const FILE_LEVEL: LevelFilter = LevelFilter::Debug;

/// Stderr level for `-v` counts: warnings by default, then info, debug, trace.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Rotate old logs and install the global logger.
///
/// Always logs to `latest.log` in the cache directory when one exists. With
/// `verbose > 0` records are mirrored to stderr.
pub fn init(verbose: u8) -> Result<(), CliError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    paths::rotate_logs();
    if let Some(path) = paths::log_file() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(&path)?;
        loggers.push(WriteLogger::new(FILE_LEVEL, Config::default(), file));
    }

    if verbose > 0 {
        loggers.push(TermLogger::new(
            verbosity_level(verbose),
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers)?;
    log::info!("[logging::init] assetdesk {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
