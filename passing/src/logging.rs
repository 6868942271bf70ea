//! Diagnostic tracing for the demonstration binaries.
//!
//! Output goes to stderr only, so stdout carries nothing but transcripts.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_LEVEL`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env_lossy()
}

/// Install the global subscriber: compact, no timestamps, no targets.
///
/// # Example
/// ```bash
/// RUST_LOG=passing=debug cargo run --bin call-by-pointer
/// ```
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}
