//! Battery characteristics relevant to temperature alerting

use serde::{Deserialize, Serialize};

use crate::temperature::{CoolingType, TemperatureLimits};

/// Static description of a battery pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryCharacter {
    /// Cooling mechanism, which decides the safe temperature range
    pub cooling_type: CoolingType,
    /// Manufacturer brand
    pub brand: String,
}

impl BatteryCharacter {
    /// Create a new BatteryCharacter
    ///
    /// # Arguments
    /// * `cooling_type` - Cooling mechanism of the pack
    /// * `brand` - Manufacturer brand
    pub fn new(cooling_type: CoolingType, brand: impl Into<String>) -> Self {
        Self { cooling_type, brand: brand.into() }
    }

    /// Safe temperature range for this battery
    pub fn temperature_limits(&self) -> TemperatureLimits {
        self.cooling_type.limits()
    }
}
