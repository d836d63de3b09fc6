//! Structured logging for the word-ladder CLI.
//!
//! Logs go to stderr so stdout stays clean for results. The filter comes
//! from `--log` / `WORD_LADDER_LOG`:
//!
//! - `WORD_LADDER_LOG=warn` - default
//! - `WORD_LADDER_LOG=info` - populate and precompute timings
//! - `WORD_LADDER_LOG=word_ladder_core=debug` - per-stage detail

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. An unparsable filter falls back to
/// `warn`. Later calls are ignored.
pub fn init(filter: &str, json: bool) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    // Try to set the global default - ignore if already set
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
