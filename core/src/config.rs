use crate::error::{LadderError, Result};

/// Default ceiling for the path table, in megabytes.
pub const DEFAULT_MAX_MEMORY_MB: usize = 4096;

/// Accepted range for `max_memory_mb`.
pub const MIN_MAX_MEMORY_MB: usize = 1;
pub const MAX_MAX_MEMORY_MB: usize = 131_072; // 128 GB

/// Tunables for a `WordLadder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderConfig {
    /// `precompute()` refuses to build a path table estimated above this.
    pub max_memory_mb: usize,
}

impl LadderConfig {
    /// Build a config, rejecting a memory ceiling outside the accepted range.
    pub fn new(max_memory_mb: usize) -> Result<Self> {
        if !(MIN_MAX_MEMORY_MB..=MAX_MAX_MEMORY_MB).contains(&max_memory_mb) {
            return Err(LadderError::InvalidArgument(format!(
                "max_memory_mb must be between {} and {}, got {}",
                MIN_MAX_MEMORY_MB, MAX_MAX_MEMORY_MB, max_memory_mb
            )));
        }
        Ok(Self { max_memory_mb })
    }

    pub fn max_memory_bytes(&self) -> usize {
        self.max_memory_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_memory_mb: DEFAULT_MAX_MEMORY_MB,
        }
    }
}
