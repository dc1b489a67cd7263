//! Test doubles for the console writer: a capturing transport, a transport
//! that always fails, and delay providers that record or really sleep.

use std::string::String;
use std::time::Duration;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::transport::SerialTransport;

/// One primitive call seen by [`CaptureTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Text(String),
    Line,
}

/// Records every primitive it receives, in order.
#[derive(Debug, Default)]
pub struct CaptureTransport {
    pub ops: Vec<Op>,
}

impl CaptureTransport {
    /// Everything written, with terminators shown as `"\r\n"`.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                Op::Text(t) => out.push_str(t),
                Op::Line => out.push_str("\r\n"),
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl SerialTransport for CaptureTransport {
    type Error = core::convert::Infallible;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.ops.push(Op::Text(text.into()));
        Ok(())
    }

    fn write_line(&mut self) -> Result<(), Self::Error> {
        self.ops.push(Op::Line);
        Ok(())
    }
}

/// Rejects every write, like a UART whose buffer is full.
#[derive(Debug, Default)]
pub struct FailingTransport {
    pub attempts: usize,
}

impl FailingTransport {
    pub const ERROR: &'static str = "tx buffer full";
}

impl SerialTransport for FailingTransport {
    type Error = &'static str;

    fn write_text(&mut self, _text: &str) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(Self::ERROR)
    }

    fn write_line(&mut self) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(Self::ERROR)
    }
}

/// Counts requested delays without pausing.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub calls: usize,
    pub total_ns: u64,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

/// Blocks the test thread for real.
#[derive(Debug, Default)]
pub struct SleepDelay;

impl DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
