//! Shared deterministic types for the swap demonstrations.
//!
//! These types carry no I/O and serialize to stable JSON for `passing --json`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Parameter-passing discipline used by a swap.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mechanism {
    /// Callee receives copies; the caller never sees the exchange.
    Value,
    /// Callee receives raw addresses of the caller's locals.
    Pointer,
    /// Callee receives exclusive borrows of the caller's locals.
    Reference,
}

impl Mechanism {
    pub const ALL: [Mechanism; 3] = [Mechanism::Value, Mechanism::Pointer, Mechanism::Reference];

    pub fn as_str(self) -> &'static str {
        match self {
            Mechanism::Value => "value",
            Mechanism::Pointer => "pointer",
            Mechanism::Reference => "reference",
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two integers a demonstration works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub a: i32,
    pub b: i32,
}

impl Pair {
    pub const fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    pub const fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl Default for Pair {
    fn default() -> Self {
        Self::new(5, 2)
    }
}

/// Record of a single swap call as seen from both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demonstration {
    pub mechanism: Mechanism,
    /// Caller's locals before the call.
    pub before: Pair,
    /// Callee's parameters after it exchanged them.
    pub in_callee: Pair,
    /// Caller's locals after the call returned.
    pub after: Pair,
}

impl Demonstration {
    /// Whether the exchange was visible to the caller.
    pub fn swapped(&self) -> bool {
        self.after != self.before
    }
}
