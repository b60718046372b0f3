// Traits module
//
// Capability traits for the alerting pipeline. Each one covers a single step,
// so callers can depend on exactly the step they need.

use crate::{alert::AlertTarget, breach::BreachType, error::Result, temperature::CoolingType};

/// Classifies a value against an inclusive range
pub trait BreachDetector {
    fn infer_breach(&self, value: f64, lower_limit: f64, upper_limit: f64) -> BreachType;
}

/// Classifies a temperature reading using the limits of a cooling type
pub trait TemperatureClassifier {
    fn classify_temperature_breach(&self, cooling_type: CoolingType, temperature_in_c: f64) -> BreachType;
}

/// Delivers the notification for a breach to a target
pub trait AlertSender {
    fn send_alert(&self, target: AlertTarget, breach: BreachType) -> Result<()>;
}
