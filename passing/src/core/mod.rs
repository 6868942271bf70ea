//! Deterministic, pure logic for the swap demonstrations.
//!
//! Core modules must be free of I/O side effects. Printing happens in
//! [`crate::render`], never inside a swap.

pub mod swap;
pub mod types;
