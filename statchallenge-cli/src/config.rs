use anyhow::{anyhow, Result};
use clap::Parser;
use games_statchallenge::parse_target;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "stat-challenge")]
#[command(about = "Hidden stat challenge")]
#[command(long_about = "Terminal front-end for the hidden stat challenge.

Pick a target total and a generation, then lock one hidden stat category for
each of six randomly drawn creatures. Reach the target to win.")]
pub struct Config {
    /// Catalog file (TOML); the built-in catalog is used when omitted
    #[arg(long, env = "STAT_CHALLENGE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible draws (random when omitted)
    #[arg(long, env = "STAT_CHALLENGE_SEED")]
    pub seed: Option<u64>,

    /// Start immediately with this target
    #[arg(long, env = "STAT_CHALLENGE_TARGET")]
    pub target: Option<String>,

    /// Generation filter: "all" or 1-9 (unknown keys mean all)
    #[arg(long, env = "STAT_CHALLENGE_GENERATION", default_value = "all")]
    pub generation: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "STAT_CHALLENGE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.log_level()?;

        if let Some(path) = &self.catalog {
            if !path.is_file() {
                return Err(anyhow!("catalog file not found: {}", path.display()));
            }
        }

        if let Some(target) = &self.target {
            if parse_target(target).is_none() {
                return Err(anyhow!("target must be a positive whole number, got {target:?}"));
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| anyhow!("invalid log level: {}", self.log_level))
    }
}
