use std::{sync::Arc, thread};

use typewise_alert::prelude::*;

use crate::common::TestBatteryBuilder;

#[test]
fn test_check_and_alert_to_controller() -> Result<()> {
    let checker = TypewiseAlert::new(MemorySink::new());
    let battery = TestBatteryBuilder::new().build();

    checker.check_and_alert(AlertTarget::ToController, &battery, 20.0)?;

    assert_eq!(checker.sink().output(), "65261 : NORMAL");
    Ok(())
}

#[test]
fn test_check_and_alert_to_email() -> Result<()> {
    let checker = TypewiseAlert::new(MemorySink::new());
    let battery = TestBatteryBuilder::new().build();

    checker.check_and_alert(AlertTarget::ToEmail, &battery, -1.0)?;

    assert_eq!(checker.sink().messages(), vec!["To: a.b@c.com\nHi, the temperature is too low"]);
    Ok(())
}

#[test]
fn test_check_and_alert_hi_active_email() -> Result<()> {
    let checker = TypewiseAlert::new(WriterSink::new(Vec::new()));
    let battery = TestBatteryBuilder::new().cooling_type(CoolingType::HiActiveCooling).build();

    checker.check_and_alert(AlertTarget::ToEmail, &battery, 30.0)?;
    checker.check_and_alert(AlertTarget::ToEmail, &battery, 46.0)?;

    let written = String::from_utf8(checker.into_sink().into_inner()).unwrap();
    assert_eq!(written, "To: a.b@c.com\nHi, the temperature is too high\n");
    Ok(())
}

#[test]
fn test_concurrent_writers_do_not_interleave_messages() -> Result<()> {
    let sink = Arc::new(WriterSink::new(Vec::new()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || -> Result<()> {
                let checker = TypewiseAlert::new(sink);
                let battery = TestBatteryBuilder::new().build();
                for _ in 0..25 {
                    checker.check_and_alert(AlertTarget::ToEmail, &battery, 50.0)?;
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap()?;
    }

    let sink = Arc::try_unwrap(sink).ok().expect("all writers finished");
    let written = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 200);
    for pair in lines.chunks(2) {
        assert_eq!(pair, ["To: a.b@c.com", "Hi, the temperature is too high"]);
    }
    Ok(())
}
