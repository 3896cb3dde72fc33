//! File logging through log4rs.
//!
//! The terminal is in raw mode while the game runs, so records only ever go
//! to a file.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Build the log4rs config for a single file appender.
pub fn file_config(level: LevelFilter, path: &Path) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid log configuration")
}

/// Install the global logger. Can only succeed once per process.
pub fn init_log(level: LevelFilter, path: &Path) -> Result<()> {
    let config = file_config(level, path)?;
    log4rs::init_config(config).context("logger already installed")?;
    Ok(())
}
