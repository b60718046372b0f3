//! Breach alert dispatch
//!
//! Turns a [`BreachType`] into a notification for an [`AlertTarget`] and
//! hands it to an [`AlertSink`]:
//!
//! - the controller receives a `65261 : <BREACH>` frame for every reading
//! - the e-mail recipient receives a two-line message only when the reading
//!   is out of range
//!
//! # Examples
//!
//! ```
//! use typewise_alert::alert::{send_alert, AlertTarget, MemorySink};
//! use typewise_alert::breach::BreachType;
//!
//! let sink = MemorySink::new();
//! send_alert(&sink, AlertTarget::ToEmail, BreachType::TooLow)?;
//! send_alert(&sink, AlertTarget::ToEmail, BreachType::Normal)?;
//! assert_eq!(sink.output(), "To: a.b@c.com\nHi, the temperature is too low");
//! # Ok::<(), typewise_alert::Error>(())
//! ```

pub mod constants;
pub mod sink;
pub mod types;

pub use sink::{AlertSink, ConsoleSink, MemorySink, WriterSink};
pub use types::{Alert, AlertTarget};

use tracing::debug;

use crate::{breach::BreachType, error::Result};

/// Send the alert for `breach` to `target` through `sink`
///
/// Emits at most one message. E-mail alerts for a normal reading are
/// skipped and return `Ok(())`.
pub fn send_alert<S: AlertSink + ?Sized>(sink: &S, target: AlertTarget, breach: BreachType) -> Result<()> {
    match Alert::for_target(target, breach) {
        Some(alert) => {
            debug!(alert_target = %target, breach = %breach, "dispatching alert");
            sink.send(&alert)
        },
        None => {
            debug!(alert_target = %target, breach = %breach, "no alert required");
            Ok(())
        },
    }
}
