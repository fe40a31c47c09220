//! Core types for Scorepad.

use serde::{Deserialize, Serialize};

/// The in-memory score record: a numeric value plus the minimum number of
/// characters its rendering should occupy.
///
/// Both fields default to 0. A `length` of 0 (or below) means "no padding".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// The numeric score value.
    pub score: i32,
    /// Minimum rendered width in characters. Non-positive values disable
    /// padding; the field is never clamped in place.
    pub length: i32,
}

impl Score {
    /// Create a record with both fields explicit.
    #[must_use]
    pub const fn new(score: i32, length: i32) -> Self {
        Self { score, length }
    }
}
