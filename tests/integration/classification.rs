use typewise_alert::prelude::*;

use crate::common::TestBatteryBuilder;

#[test]
fn test_classification_table() {
    let cases = [
        (CoolingType::PassiveCooling, 20.0, BreachType::Normal),
        (CoolingType::PassiveCooling, -1.0, BreachType::TooLow),
        (CoolingType::PassiveCooling, 36.0, BreachType::TooHigh),
        (CoolingType::MedActiveCooling, 40.0, BreachType::Normal),
        (CoolingType::MedActiveCooling, 40.5, BreachType::TooHigh),
        (CoolingType::HiActiveCooling, 20.0, BreachType::Normal),
        (CoolingType::HiActiveCooling, 46.0, BreachType::TooHigh),
    ];

    for (cooling, reading, expected) in cases {
        assert_eq!(classify_temperature_breach(cooling, reading), expected, "{} at {}", cooling, reading);
    }
}

#[test]
fn test_battery_limits_follow_cooling_type() {
    let battery = TestBatteryBuilder::new().cooling_type(CoolingType::MedActiveCooling).build();
    let limits = battery.temperature_limits();

    assert_eq!(limits.lower, 0.0);
    assert_eq!(limits.upper, 40.0);
}

#[test]
fn test_unknown_cooling_type_is_rejected() {
    let err = "IMMERSION_COOLING".parse::<CoolingType>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid argument: Invalid cooling type: IMMERSION_COOLING");
}

#[test]
fn test_battery_from_json_then_check() -> Result<()> {
    let battery: BatteryCharacter =
        serde_json::from_str(r#"{"coolingType": "MED_ACTIVE_COOLING", "brand": "Acme"}"#).unwrap();
    let checker = TypewiseAlert::new(MemorySink::new());

    let breach = checker.check_and_alert(AlertTarget::ToController, &battery, 38.0)?;

    assert_eq!(breach, BreachType::Normal);
    assert_eq!(checker.sink().output(), "65261 : NORMAL");
    Ok(())
}
