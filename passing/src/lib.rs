//! Parameter-passing demonstrations built around swapping two integers.
//!
//! - **[`core`]**: the three swap variants and the types describing a call.
//!   No I/O.
//! - **[`io`]**: config file loading and writing.
//!
//! [`demo`] drives a swap from the caller's side and [`render`] turns the
//! result into the console transcript printed by the binaries.

pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
