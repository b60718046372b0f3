//! Battery temperature classification
//!
//! Each [`CoolingType`] has a fixed safe operating range. A reading is
//! classified by looking up the range for the battery's cooling type and
//! comparing the reading against it.
//!
//! # Examples
//!
//! ```
//! use typewise_alert::breach::BreachType;
//! use typewise_alert::temperature::{classify_temperature_breach, CoolingType};
//!
//! assert_eq!(classify_temperature_breach(CoolingType::PassiveCooling, 20.0), BreachType::Normal);
//! assert_eq!(classify_temperature_breach(CoolingType::HiActiveCooling, 46.0), BreachType::TooHigh);
//! ```

pub mod constants;
pub mod types;

pub use types::{CoolingType, TemperatureLimits};

use tracing::debug;

use crate::breach::BreachType;

/// Classify a temperature reading for the given cooling type
pub fn classify_temperature_breach(cooling_type: CoolingType, temperature_in_c: f64) -> BreachType {
    let limits = cooling_type.limits();
    let breach = limits.classify(temperature_in_c);
    debug!(
        cooling_type = %cooling_type,
        temperature_in_c,
        lower = limits.lower,
        upper = limits.upper,
        breach = %breach,
        "classified temperature"
    );
    breach
}
