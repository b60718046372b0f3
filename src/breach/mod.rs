//! Breach inference
//!
//! Classifies a measured value against a closed interval `[lower, upper]`.
//! Both bounds are inclusive, and the bounds are used exactly as given:
//! callers are expected to pass `lower <= upper`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Classification of a value relative to its allowed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreachType {
    /// Value lies within the allowed range
    Normal,
    /// Value is below the lower limit
    TooLow,
    /// Value is above the upper limit
    TooHigh,
}

impl BreachType {
    /// Symbolic name used in controller frames and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            BreachType::Normal => "NORMAL",
            BreachType::TooLow => "TOO_LOW",
            BreachType::TooHigh => "TOO_HIGH",
        }
    }

    /// Returns true for any classification other than `Normal`
    pub fn is_breach(&self) -> bool {
        !matches!(self, BreachType::Normal)
    }
}

impl fmt::Display for BreachType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the breach type of `value` for the interval `[lower_limit, upper_limit]`
pub fn infer_breach(value: f64, lower_limit: f64, upper_limit: f64) -> BreachType {
    let breach = if value < lower_limit {
        BreachType::TooLow
    } else if value > upper_limit {
        BreachType::TooHigh
    } else {
        BreachType::Normal
    };
    trace!(value, lower_limit, upper_limit, %breach, "inferred breach");
    breach
}
