//! Side-effecting helpers (filesystem access).

pub mod config;
