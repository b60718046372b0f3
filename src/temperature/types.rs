use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    breach::{infer_breach, BreachType},
    error::{Error, Result},
    temperature::constants::*,
};

/// Cooling mechanism of a battery pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoolingType {
    /// No active cooling
    PassiveCooling,
    /// Moderate active cooling
    MedActiveCooling,
    /// Strong active cooling
    HiActiveCooling,
}

impl CoolingType {
    /// All cooling types, in table order
    pub const ALL: [CoolingType; 3] =
        [CoolingType::PassiveCooling, CoolingType::MedActiveCooling, CoolingType::HiActiveCooling];

    /// Symbolic name of the cooling type
    pub fn as_str(&self) -> &'static str {
        match self {
            CoolingType::PassiveCooling => "PASSIVE_COOLING",
            CoolingType::MedActiveCooling => "MED_ACTIVE_COOLING",
            CoolingType::HiActiveCooling => "HI_ACTIVE_COOLING",
        }
    }

    /// Safe operating temperature range for this cooling type
    pub fn limits(&self) -> TemperatureLimits {
        match self {
            CoolingType::PassiveCooling => {
                TemperatureLimits::new(PASSIVE_COOLING_LOWER_LIMIT, PASSIVE_COOLING_UPPER_LIMIT)
            },
            CoolingType::MedActiveCooling => {
                TemperatureLimits::new(MED_ACTIVE_COOLING_LOWER_LIMIT, MED_ACTIVE_COOLING_UPPER_LIMIT)
            },
            CoolingType::HiActiveCooling => {
                TemperatureLimits::new(HI_ACTIVE_COOLING_LOWER_LIMIT, HI_ACTIVE_COOLING_UPPER_LIMIT)
            },
        }
    }
}

impl fmt::Display for CoolingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoolingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CoolingType::ALL.into_iter().find(|cooling| cooling.as_str() == s).ok_or_else(|| {
            warn!(input = s, "rejecting unknown cooling type");
            Error::invalid_argument(format!("Invalid cooling type: {}", s))
        })
    }
}

impl TryFrom<&str> for CoolingType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// Inclusive temperature range in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureLimits {
    /// Lowest acceptable temperature
    pub lower: f64,
    /// Highest acceptable temperature
    pub upper: f64,
}

impl TemperatureLimits {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Classify a temperature against this range
    pub fn classify(&self, temperature_in_c: f64) -> BreachType {
        infer_breach(temperature_in_c, self.lower, self.upper)
    }

    pub fn contains(&self, temperature_in_c: f64) -> bool {
        self.classify(temperature_in_c) == BreachType::Normal
    }
}
