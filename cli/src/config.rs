use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Args;
use word_ladder_core::{LadderConfig, DEFAULT_MAX_MEMORY_MB};

use crate::output::OutputFormat;

/// Settings shared by every subcommand. Each flag falls back to an
/// environment variable, then to its default.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Dictionary file, one word per line
    #[arg(short, long, env = "WORD_LADDER_DICT", global = true)]
    pub dictionary: Option<PathBuf>,

    /// Maximum memory for the precomputed path table (MB)
    #[arg(
        long,
        env = "WORD_LADDER_MAX_MEMORY_MB",
        default_value_t = DEFAULT_MAX_MEMORY_MB,
        global = true
    )]
    pub max_memory_mb: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log filter, e.g. "info" or "word_ladder_core=debug"
    #[arg(long, env = "WORD_LADDER_LOG", default_value = "warn", global = true)]
    pub log: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl Settings {
    /// The dictionary path, or an error naming both ways to set it.
    pub fn dictionary_path(&self) -> Result<&Path> {
        self.dictionary.as_deref().ok_or_else(|| {
            anyhow!("no dictionary specified; use --dictionary or set WORD_LADDER_DICT")
        })
    }

    pub fn ladder_config(&self) -> Result<LadderConfig> {
        Ok(LadderConfig::new(self.max_memory_mb)?)
    }
}
