//! Stable exit codes for the `passing` binaries.

/// Demonstration printed.
pub const OK: i32 = 0;
/// Invalid config or failed I/O.
pub const INVALID: i32 = 1;
