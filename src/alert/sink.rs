//! Notification sinks
//!
//! A sink receives one complete [`Alert`] per call and writes it out as a
//! single unit. Sinks that may be shared hold a lock for the whole message,
//! so a two-line e-mail is never interleaved with another caller's output.

use std::{
    io::{self, Write},
    sync::Arc,
};

#[cfg(test)]
use mockall::automock;
use parking_lot::Mutex;

use crate::{alert::types::Alert, error::Result};

/// Destination for rendered alerts
#[cfg_attr(test, automock)]
pub trait AlertSink: Send + Sync {
    /// Deliver one alert
    fn send(&self, alert: &Alert) -> Result<()>;
}

impl<S: AlertSink + ?Sized> AlertSink for &S {
    fn send(&self, alert: &Alert) -> Result<()> {
        (**self).send(alert)
    }
}

impl<S: AlertSink + ?Sized> AlertSink for Arc<S> {
    fn send(&self, alert: &Alert) -> Result<()> {
        (**self).send(alert)
    }
}

impl<S: AlertSink + ?Sized> AlertSink for Box<S> {
    fn send(&self, alert: &Alert) -> Result<()> {
        (**self).send(alert)
    }
}

/// Writes alerts to standard output, one message per locked write
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl AlertSink for ConsoleSink {
    fn send(&self, alert: &Alert) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", alert)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Writes alerts to any [`Write`] implementation behind a mutex
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> AlertSink for WriterSink<W> {
    fn send(&self, alert: &Alert) -> Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", alert)?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps rendered alerts in memory, in delivery order
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// All received messages joined into console-style output
    pub fn output(&self) -> String {
        self.messages.lock().join("\n")
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl AlertSink for MemorySink {
    fn send(&self, alert: &Alert) -> Result<()> {
        self.messages.lock().push(alert.to_string());
        Ok(())
    }
}
