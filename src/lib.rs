//! Typewise Alert - battery temperature breach classification and alerting
//!
//! This crate checks a battery temperature reading against the safe range of
//! the battery's cooling type and notifies a target about the result.
//!
//! # Features
//!
//! - **Breach inference**: classify any value against an inclusive range
//! - **Temperature classification**: fixed limits per cooling type
//! - **Alert dispatch**: controller frames and e-mail messages written to a
//!   pluggable [`AlertSink`](alert::AlertSink)
//!
//! # Examples
//!
//! ```rust
//! use typewise_alert::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let checker = TypewiseAlert::new(MemorySink::new());
//!     let battery = BatteryCharacter::new(CoolingType::PassiveCooling, "Acme");
//!
//!     checker.check_and_alert(AlertTarget::ToEmail, &battery, 36.0)?;
//!     assert_eq!(checker.sink().output(), "To: a.b@c.com\nHi, the temperature is too high");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Classification itself cannot fail. Errors come from the edges: parsing an
//! unknown cooling type or alert target name, and sink I/O failures.
//!
//! ```rust
//! use typewise_alert::{temperature::CoolingType, Error};
//!
//! let err = "WATER_COOLING".parse::<CoolingType>().unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument(_)));
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events and spans but never installs a
//! subscriber; that is left to the application.

pub mod error;

pub use error::{Error, Result};

// Public modules
pub mod alert;
pub mod battery;
pub mod breach;
pub mod temperature;
pub mod traits;
pub mod typewise;

pub use typewise::TypewiseAlert;

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::alert::{send_alert, Alert, AlertSink, AlertTarget, ConsoleSink, MemorySink, WriterSink};
    pub use crate::battery::BatteryCharacter;
    pub use crate::breach::{infer_breach, BreachType};
    pub use crate::temperature::{classify_temperature_breach, CoolingType, TemperatureLimits};
    pub use crate::traits::{AlertSender, BreachDetector, TemperatureClassifier};
    pub use crate::typewise::TypewiseAlert;
    pub use crate::Error;
    pub use crate::Result;
}
