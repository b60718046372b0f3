//! End-to-end check of a battery reading
//!
//! [`TypewiseAlert`] ties the pipeline together: classify a reading by the
//! battery's cooling type, then alert the chosen target through the owned
//! sink.

use tracing::{debug, instrument};

use crate::{
    alert::{self, AlertSink, AlertTarget, ConsoleSink},
    battery::BatteryCharacter,
    breach::{self, BreachType},
    error::Result,
    temperature::{self, CoolingType},
    traits::{AlertSender, BreachDetector, TemperatureClassifier},
};

/// Temperature checker that alerts through a [`AlertSink`]
#[derive(Debug)]
pub struct TypewiseAlert<S: AlertSink = ConsoleSink> {
    sink: S,
}

impl Default for TypewiseAlert<ConsoleSink> {
    fn default() -> Self {
        Self::new(ConsoleSink::new())
    }
}

impl<S: AlertSink> TypewiseAlert<S> {
    /// Create a checker that writes alerts to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Classify `temperature_in_c` for `battery` and alert `target`
    ///
    /// Returns the classification that was dispatched.
    ///
    /// # Examples
    /// ```
    /// use typewise_alert::prelude::*;
    ///
    /// let checker = TypewiseAlert::new(MemorySink::new());
    /// let battery = BatteryCharacter::new(CoolingType::PassiveCooling, "TestBrand");
    ///
    /// let breach = checker.check_and_alert(AlertTarget::ToController, &battery, 20.0)?;
    /// assert_eq!(breach, BreachType::Normal);
    /// assert_eq!(checker.sink().output(), "65261 : NORMAL");
    /// # Ok::<(), typewise_alert::Error>(())
    /// ```
    #[instrument(level = "debug", skip(self, target, battery), fields(alert_target = %target, brand = %battery.brand))]
    pub fn check_and_alert(
        &self,
        target: AlertTarget,
        battery: &BatteryCharacter,
        temperature_in_c: f64,
    ) -> Result<BreachType> {
        let breach = self.classify_temperature_breach(battery.cooling_type, temperature_in_c);
        self.send_alert(target, breach)?;
        debug!(breach = %breach, "check complete");
        Ok(breach)
    }
}

impl<S: AlertSink> BreachDetector for TypewiseAlert<S> {
    fn infer_breach(&self, value: f64, lower_limit: f64, upper_limit: f64) -> BreachType {
        breach::infer_breach(value, lower_limit, upper_limit)
    }
}

impl<S: AlertSink> TemperatureClassifier for TypewiseAlert<S> {
    fn classify_temperature_breach(&self, cooling_type: CoolingType, temperature_in_c: f64) -> BreachType {
        temperature::classify_temperature_breach(cooling_type, temperature_in_c)
    }
}

impl<S: AlertSink> AlertSender for TypewiseAlert<S> {
    fn send_alert(&self, target: AlertTarget, breach: BreachType) -> Result<()> {
        alert::send_alert(&self.sink, target, breach)
    }
}
