use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    alert::constants::{CONTROLLER_HEADER, EMAIL_BODY_TOO_HIGH, EMAIL_BODY_TOO_LOW, EMAIL_RECIPIENT},
    breach::BreachType,
    error::{Error, Result},
};

/// Destination channel for a breach notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertTarget {
    /// Operational controller, notified on every reading
    ToController,
    /// E-mail recipient, notified only on a breach
    ToEmail,
}

impl AlertTarget {
    pub const ALL: [AlertTarget; 2] = [AlertTarget::ToController, AlertTarget::ToEmail];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertTarget::ToController => "TO_CONTROLLER",
            AlertTarget::ToEmail => "TO_EMAIL",
        }
    }
}

impl fmt::Display for AlertTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AlertTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Invalid alert target: {}", s)))
    }
}

/// A rendered-ready notification for one target
///
/// `Display` produces the exact text delivered to a sink:
///
/// ```
/// use typewise_alert::alert::{Alert, AlertTarget};
/// use typewise_alert::breach::BreachType;
///
/// let alert = Alert::for_target(AlertTarget::ToController, BreachType::TooLow).unwrap();
/// assert_eq!(alert.to_string(), "65261 : TOO_LOW");
///
/// let alert = Alert::for_target(AlertTarget::ToEmail, BreachType::TooHigh).unwrap();
/// assert_eq!(alert.to_string(), "To: a.b@c.com\nHi, the temperature is too high");
///
/// assert!(Alert::for_target(AlertTarget::ToEmail, BreachType::Normal).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    /// Controller frame: `<header> : <breach>`
    Controller { header: u16, breach: BreachType },
    /// Two-line e-mail: `To: <recipient>` followed by the body
    Email { recipient: String, body: String },
}

impl Alert {
    /// Build the alert for `target`, or `None` when the target stays silent
    /// for this breach type
    pub fn for_target(target: AlertTarget, breach: BreachType) -> Option<Self> {
        match target {
            AlertTarget::ToController => Some(Self::controller(breach)),
            AlertTarget::ToEmail => Self::email(breach),
        }
    }

    pub fn controller(breach: BreachType) -> Self {
        Alert::Controller { header: CONTROLLER_HEADER, breach }
    }

    /// E-mail alert for a breach; a normal reading produces no e-mail
    pub fn email(breach: BreachType) -> Option<Self> {
        let body = match breach {
            BreachType::TooLow => EMAIL_BODY_TOO_LOW,
            BreachType::TooHigh => EMAIL_BODY_TOO_HIGH,
            BreachType::Normal => return None,
        };
        Some(Alert::Email { recipient: EMAIL_RECIPIENT.to_string(), body: body.to_string() })
    }

    pub fn target(&self) -> AlertTarget {
        match self {
            Alert::Controller { .. } => AlertTarget::ToController,
            Alert::Email { .. } => AlertTarget::ToEmail,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::Controller { header, breach } => write!(f, "{} : {}", header, breach),
            Alert::Email { recipient, body } => write!(f, "To: {}\n{}", recipient, body),
        }
    }
}
