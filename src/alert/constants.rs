/// Header word prefixed to every controller frame
pub const CONTROLLER_HEADER: u16 = 0xfeed;

/// Recipient of e-mail alerts
pub const EMAIL_RECIPIENT: &str = "a.b@c.com";

/// E-mail body sent when the temperature is below the safe range
pub const EMAIL_BODY_TOO_LOW: &str = "Hi, the temperature is too low";

/// E-mail body sent when the temperature is above the safe range
pub const EMAIL_BODY_TOO_HIGH: &str = "Hi, the temperature is too high";
