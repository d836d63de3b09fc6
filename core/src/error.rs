use thiserror::Error;

/// Errors surfaced by the word ladder core.
///
/// A missing ladder between two known words is not an error; queries report
/// it as `Ok(None)` or the `-1` distance sentinel.
#[derive(Debug, Error)]
pub enum LadderError {
    /// Blank or unknown word, or a call made in the wrong state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The word source could not be read.
    #[error("word source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// The path table would not fit under the configured ceiling.
    #[error("path table needs ~{required_mb}MB, exceeds max_memory_mb={max_mb}MB")]
    MemoryLimit { required_mb: usize, max_mb: usize },
}

pub type Result<T> = std::result::Result<T, LadderError>;
