//! Filtered console writer
//!
//! Wraps a [`SerialTransport`] and drops writes whose class ranks below the
//! configured verbosity. Dropped line and formatted writes still cost
//! `skip_delay_ms`, so code that paces itself on console output keeps the
//! same timing whatever the verbosity.

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::config::OutputConfig;
use crate::output::{should_forward, MessageClass, Rank, VerbosityLevel};
use crate::transport::{Radix, SerialTransport};

pub struct FilteredConsoleWriter<T, D> {
    transport: T,
    delay: D,
    config: OutputConfig,
}

impl<T: SerialTransport, D: DelayNs> FilteredConsoleWriter<T, D> {
    pub fn new(transport: T, delay: D, config: OutputConfig) -> Self {
        Self {
            transport,
            delay,
            config,
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.config.verbosity
    }

    /// Intended for startup only; the level should stay fixed afterwards.
    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.config.verbosity = verbosity;
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    pub fn forwards(&self, class: MessageClass) -> bool {
        should_forward(class, self.config.verbosity)
    }

    pub fn forwards_rank(&self, rank: Rank) -> bool {
        rank.passes(self.config.verbosity)
    }

    /// Writes `text` without a terminator. Nothing happens if filtered.
    pub fn write_text(&mut self, class: MessageClass, text: &str) -> Result<(), T::Error> {
        if self.forwards(class) {
            self.transport.write_text(text)?;
        }
        Ok(())
    }

    /// Writes `value` as digits in `radix`. Nothing happens if filtered.
    pub fn write_byte(&mut self, class: MessageClass, value: u8, radix: Radix) -> Result<(), T::Error> {
        if self.forwards(class) {
            self.transport.write_byte(value, radix)?;
        }
        Ok(())
    }

    /// Ends the current line, or pauses for the skip delay if filtered.
    pub fn write_line(&mut self, class: MessageClass) -> Result<(), T::Error> {
        if self.forwards(class) {
            self.transport.write_line()
        } else {
            self.skip();
            Ok(())
        }
    }

    /// Writes `text` and a terminator, or pauses for the skip delay if filtered.
    pub fn write_line_with_text(&mut self, class: MessageClass, text: &str) -> Result<(), T::Error> {
        if self.forwards(class) {
            self.transport.write_text(text)?;
            self.transport.write_line()
        } else {
            self.skip();
            Ok(())
        }
    }

    /// Renders `args` if `rank` passes the verbosity, otherwise pauses for
    /// the skip delay. See [`Rank`] for how out-of-range values behave.
    pub fn write_formatted(&mut self, rank: Rank, args: fmt::Arguments<'_>) -> Result<(), T::Error> {
        if self.forwards_rank(rank) {
            self.transport.write_fmt(args)
        } else {
            self.skip();
            Ok(())
        }
    }

    /// [`write_formatted`](Self::write_formatted) followed by a terminator.
    pub fn write_line_formatted(&mut self, rank: Rank, args: fmt::Arguments<'_>) -> Result<(), T::Error> {
        if self.forwards_rank(rank) {
            self.transport.write_fmt(args)?;
            self.transport.write_line()
        } else {
            self.skip();
            Ok(())
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_parts(self) -> (T, D) {
        (self.transport, self.delay)
    }

    fn skip(&mut self) {
        self.delay.delay_ms(self.config.skip_delay_ms);
    }
}

/// Formatted write through a [`FilteredConsoleWriter`].
///
/// `rank` is anything convertible into [`Rank`](crate::output::Rank): a
/// `MessageClass` or an explicit `Rank::new(..)`.
///
/// ```ignore
/// serial_printf!(console, MessageClass::Data, "sensor age: {} days", age)?;
/// ```
#[macro_export]
macro_rules! serial_printf {
    ($writer:expr, $rank:expr, $($arg:tt)*) => {
        $writer.write_formatted(
            ::core::convert::Into::<$crate::output::Rank>::into($rank),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Like [`serial_printf!`], appending a line terminator.
#[macro_export]
macro_rules! serial_printfln {
    ($writer:expr, $rank:expr, $($arg:tt)*) => {
        $writer.write_line_formatted(
            ::core::convert::Into::<$crate::output::Rank>::into($rank),
            ::core::format_args!($($arg)*),
        )
    };
}
