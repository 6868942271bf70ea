//! Test-only helpers shared by unit and CLI tests.

use std::path::Path;

use crate::core::types::Pair;
use crate::io::config::{CONFIG_FILE, DemoConfig, write_config};

/// Transcript lines expected for the given caller-visible result, starting
/// from the default pair (callee always sees `2, 5`).
pub fn expected_transcript(after: Pair) -> String {
    format!(
        "Value of swap in fn 2\n\
         Value of swap in fn 5\n\
         ----Calling swap fn in main---\n\
         Value of a is {}\n\
         Value of b is {}\n",
        after.a, after.b
    )
}

/// Write `cfg` as `passing.toml` inside `dir`.
pub fn write_config_in(dir: &Path, cfg: &DemoConfig) {
    write_config(&dir.join(CONFIG_FILE), cfg).expect("write config");
}

/// Fresh temporary directory for a test.
pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}
