//! Scorepad Core
//!
//! A tiny formatter that turns an integer score into a zero-padded decimal
//! string, the way arcade score displays do (`5` → `005`).
//!
//! # Quick Start
//!
//! ```
//! use scorepad_core::ScoreString;
//!
//! let mut formatter = ScoreString::new();
//! formatter.set_score(5);
//! formatter.set_length(3);
//! assert_eq!(formatter.to_string(), "005");
//!
//! // Padding never truncates.
//! formatter.set_score(12345);
//! assert_eq!(formatter.to_string(), "12345");
//! ```
//!
//! # One-shot Formatting
//!
//! ```
//! use scorepad_core::format_score;
//!
//! assert_eq!(format_score(42, 6), "000042");
//! ```
//!
//! Padding counts characters, not digits, so a minus sign is padded over
//! like anything else: `format_score(-7, 4)` is `"00-7"`. See
//! [`format_score`] for why that stays as-is.

pub mod format;
pub mod types;

pub use format::format_score;
pub use types::Score;

use std::fmt;

/// Owner of a [`Score`] record and the sole source of truth for rendering it.
///
/// State changes only through [`set_score`](Self::set_score) and
/// [`set_length`](Self::set_length); rendering goes through [`fmt::Display`].
/// Every operation is total.
#[derive(Debug, Clone, Default)]
pub struct ScoreString {
    score: Score,
}

impl ScoreString {
    /// Create a formatter with its record reset to `{0, 0}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scorepad_core::{Score, ScoreString};
    ///
    /// let formatter = ScoreString::new();
    /// assert_eq!(formatter.score(), Score::default());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: Score::new(0, 0),
        }
    }

    /// A copy of the current record. No side effects.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Overwrite the score value; the length field is untouched.
    pub fn set_score(&mut self, score: i32) {
        self.score.score = score;
    }

    /// Overwrite the minimum rendered width; the score value is untouched.
    ///
    /// Non-positive widths disable padding.
    pub fn set_length(&mut self, length: i32) {
        self.score.length = length;
    }
}

impl fmt::Display for ScoreString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        tracing::trace!(
            score = self.score.score,
            length = self.score.length,
            "rendering score string"
        );
        f.write_str(&format_score(self.score.score, self.score.length))
    }
}

impl From<Score> for ScoreString {
    fn from(score: Score) -> Self {
        Self { score }
    }
}
