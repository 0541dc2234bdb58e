use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RankError;
use crate::rank::{RankStrategy, DEFAULT_TOP_N};

pub const DEFAULT_INPUT: &str = "urls.txt";
pub const DEFAULT_OUTPUT: &str = "result.txt";
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000_000;

/// Run configuration, optionally loaded from `~/.config/urlrank/config.toml`.
/// Missing keys take their defaults, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Input file, one URL per line. Relative paths resolve against the cwd.
    pub input_path: PathBuf,
    /// Output file; overwritten on every run.
    pub output_path: PathBuf,
    /// Maximum number of ranked rows written.
    pub top_n: usize,
    /// Log a progress line every this many counted lines.
    pub progress_interval: u64,
    /// Top-N selection: "sort" (default) or "heap".
    pub strategy: RankStrategy,
    /// Append log events to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            top_n: DEFAULT_TOP_N,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            strategy: RankStrategy::Sort,
            log_file: None,
        }
    }
}

impl RankConfig {
    pub fn validate(&self) -> Result<(), RankError> {
        if self.top_n == 0 {
            return Err(RankError::Config("top_n must be at least 1".into()));
        }
        if self.progress_interval == 0 {
            return Err(RankError::Config(
                "progress_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Location of the user config file. Does not create any directory.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlrank")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load the user config if it exists, otherwise return defaults.
/// Nothing is written to disk either way.
pub fn load_or_default() -> Result<RankConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(RankConfig::default());
    }
    load_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<RankConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: RankConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
