//! Shell configuration read from the environment.
//!
//! - `BLOCKFALL_SEED`: piece sequence seed (u32). Defaults to the wall clock.
//! - `BLOCKFALL_LOG`: log file path. Logging is off when unset or blank.
//! - `BLOCKFALL_LOG_LEVEL`: `error|warn|info|debug|trace`, default `info`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use log::LevelFilter;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const LOG_VAR: &str = "BLOCKFALL_LOG";
pub const LOG_LEVEL_VAR: &str = "BLOCKFALL_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl ShellConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get(SEED_VAR) {
            Some(s) => s
                .parse::<u32>()
                .map_err(|e| anyhow!("{SEED_VAR}={s:?} is not a u32 seed: {e}"))?,
            None => clock_seed(),
        };

        let log_level = match get(LOG_LEVEL_VAR) {
            Some(s) => parse_level(&s)?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            seed,
            log_path: get(LOG_VAR).map(PathBuf::from),
            log_level,
        })
    }
}

fn parse_level(s: &str) -> Result<LevelFilter> {
    match s.to_ascii_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(anyhow!(
            "{LOG_LEVEL_VAR}={s:?}: expected error, warn, info, debug or trace"
        )),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
