use typewise_alert::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let checker: TypewiseAlert = TypewiseAlert::default();

    println!("Controller alerts:");
    println!("------------------");
    for cooling in CoolingType::ALL {
        let battery = BatteryCharacter::new(cooling, "Demo");
        let limits = battery.temperature_limits();
        println!("{} ({:.0}..={:.0} °C)", cooling, limits.lower, limits.upper);
        for reading in [-1.0, 20.0, 42.0] {
            checker.check_and_alert(AlertTarget::ToController, &battery, reading)?;
        }
    }

    println!("\nE-mail alerts:");
    println!("--------------");
    let battery = BatteryCharacter::new(CoolingType::PassiveCooling, "Demo");
    for reading in [-1.0, 20.0, 36.0] {
        let breach = checker.check_and_alert(AlertTarget::ToEmail, &battery, reading)?;
        if !breach.is_breach() {
            println!("({:.1} °C is within range, no e-mail sent)", reading);
        }
    }

    Ok(())
}
