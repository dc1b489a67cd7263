//! Logging module
//!
//! Bridges the `log` crate onto the filtered console, so `log::info!` and
//! friends obey the same verbosity as direct console writes.
//! The backend implementation is in `logger.rs`.

pub mod logger;

pub use logger::ConsoleLogger;

use ::log::{Level, LevelFilter};
use embedded_hal::delay::DelayNs;

use crate::error::OutputError;
use crate::output::MessageClass;
use crate::transport::SerialTransport;

/// Target that marks the glucose reading line.
pub const GLUCOSE_TARGET: &str = "glucose";

/// Message class for a `log` record.
///
/// Trace and Debug map to `Debug`, Info to `Data`, Warn and Error to `Error`.
/// Any record aimed at [`GLUCOSE_TARGET`] is `Glucose` whatever its level.
pub fn class_for(level: Level, target: &str) -> MessageClass {
    if target == GLUCOSE_TARGET {
        return MessageClass::Glucose;
    }
    match level {
        Level::Trace | Level::Debug => MessageClass::Debug,
        Level::Info => MessageClass::Data,
        Level::Warn | Level::Error => MessageClass::Error,
    }
}

/// Install `logger` as the global `log` backend.
/// Must be called once early in startup.
pub fn init_logger<T, D>(logger: &'static ConsoleLogger<T, D>) -> Result<(), OutputError>
where
    T: SerialTransport + Send + 'static,
    D: DelayNs + Send + 'static,
{
    ::log::set_logger(logger)?;
    // filtering happens in the console, which also owes the skip delay
    ::log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Convenience wrappers
pub fn debug(category: &str, message: &str) {
    ::log::debug!(target: category, "{}", message);
}

pub fn data(category: &str, message: &str) {
    ::log::info!(target: category, "{}", message);
}

pub fn error(category: &str, message: &str) {
    ::log::error!(target: category, "{}", message);
}

pub fn glucose(message: &str) {
    ::log::info!(target: GLUCOSE_TARGET, "{}", message);
}
