/// Lower temperature limit for passively cooled batteries in degrees Celsius
pub const PASSIVE_COOLING_LOWER_LIMIT: f64 = 0.0;

/// Upper temperature limit for passively cooled batteries in degrees Celsius
pub const PASSIVE_COOLING_UPPER_LIMIT: f64 = 35.0;

/// Lower temperature limit for medium active cooling in degrees Celsius
pub const MED_ACTIVE_COOLING_LOWER_LIMIT: f64 = 0.0;

/// Upper temperature limit for medium active cooling in degrees Celsius
pub const MED_ACTIVE_COOLING_UPPER_LIMIT: f64 = 40.0;

/// Lower temperature limit for high active cooling in degrees Celsius
pub const HI_ACTIVE_COOLING_LOWER_LIMIT: f64 = 0.0;

/// Upper temperature limit for high active cooling in degrees Celsius
pub const HI_ACTIVE_COOLING_UPPER_LIMIT: f64 = 45.0;
