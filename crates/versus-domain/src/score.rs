//! Score module - the bounded numeric rating used throughout comparisons

use std::fmt;

/// Lowest score a dimension can award
pub const MIN_SCORE: f64 = 0.0;

/// Highest score a dimension can award
pub const MAX_SCORE: f64 = 10.0;

/// A numeric rating in the inclusive range [0, 10]
///
/// Scores are authored content, not user input, so the constructor enforces
/// the range invariant directly. Display output is fixed to one decimal
/// place; the stored value keeps full double precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Create a new score
    ///
    /// # Panics
    /// Panics if the value lies outside [0, 10] or is not finite
    pub fn new(value: f64) -> Self {
        assert!(value.is_finite(), "Score must be a finite number");
        assert!(
            value >= MIN_SCORE && value <= MAX_SCORE,
            "Score must be in [0, 10]"
        );

        Self(value)
    }

    /// The zero score, used for entities missing from a dimension row
    pub fn zero() -> Self {
        Self(MIN_SCORE)
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_one_decimal(self.0))
    }
}

/// Format a score-like value to a stable one-decimal representation
///
/// Both raw scores and computed averages render through this so that
/// repeated renders of the same data are byte-identical.
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}
