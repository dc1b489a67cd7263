#![no_std]

//! Serial console output with a verbosity filter.
//! - Writes are tagged with a `MessageClass` and dropped below the configured `VerbosityLevel`
//! - Dropped line writes pause for a fixed delay so console pacing stays the same
//! - The `log` facade can be routed through the same filter

#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod output;
pub mod transport;

// Logging modules
#[cfg(feature = "logging")]
pub mod log;

#[cfg(test)]
mod testing;

pub use config::{OutputConfig, DEFAULT_VERBOSITY, SKIP_DELAY_MS};
pub use error::OutputError;
pub use output::{should_forward, FilteredConsoleWriter, MessageClass, Rank, VerbosityLevel};
pub use transport::{FmtTransport, LineEnding, Radix, SerialTransport};
