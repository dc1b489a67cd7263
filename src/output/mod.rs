//! Output classification
//!
//! Every console write is tagged with a [`MessageClass`]. A writer forwards it
//! only when the class rank is at least the rank of its [`VerbosityLevel`].
//! The writer itself lives in `writer.rs`.

pub mod writer;

pub use writer::FilteredConsoleWriter;

use core::fmt;
use core::str::FromStr;

use crate::error::OutputError;

/// Category attached to a single console write.
///
/// Ordered by rank, not by severity: the glucose line ranks highest so it
/// survives every level except `Suppressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MessageClass {
    /// Bytes sent / received, notifications, callbacks.
    Debug = 0,
    /// Values calculated or parsed from transmitter traffic.
    Data = 1,
    Error = 2,
    /// The one line carrying the glucose reading.
    Glucose = 3,
}

impl MessageClass {
    pub const ALL: [MessageClass; 4] = [
        MessageClass::Debug,
        MessageClass::Data,
        MessageClass::Error,
        MessageClass::Glucose,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageClass::Debug => "DEBUG",
            MessageClass::Data => "DATA",
            MessageClass::Error => "ERROR",
            MessageClass::Glucose => "GLUCOSE",
        }
    }
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum class rank a writer forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum VerbosityLevel {
    /// Everything.
    Full = 0,
    /// Errors and transmitter data.
    NoDebug = 1,
    /// Errors and the glucose line.
    OnlyError = 2,
    /// Only the glucose line, no errors.
    OnlyGlucose = 3,
    /// Nothing. Use when no serial monitor is connected.
    Suppressed = 4,
}

impl VerbosityLevel {
    pub const ALL: [VerbosityLevel; 5] = [
        VerbosityLevel::Full,
        VerbosityLevel::NoDebug,
        VerbosityLevel::OnlyError,
        VerbosityLevel::OnlyGlucose,
        VerbosityLevel::Suppressed,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerbosityLevel::Full => "full",
            VerbosityLevel::NoDebug => "no-debug",
            VerbosityLevel::OnlyError => "only-error",
            VerbosityLevel::OnlyGlucose => "only-glucose",
            VerbosityLevel::Suppressed => "none",
        }
    }
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for VerbosityLevel {
    type Error = OutputError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        VerbosityLevel::ALL
            .get(rank as usize)
            .copied()
            .ok_or(OutputError::RankOutOfRange)
    }
}

impl FromStr for VerbosityLevel {
    type Err = OutputError;

    /// Accepts `full`, `no-debug`, `only-error`, `only-glucose` and
    /// `none`/`suppressed`, ignoring case and treating `_` like `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let eq = |candidate: &str| {
            name.len() == candidate.len()
                && name
                    .bytes()
                    .zip(candidate.bytes())
                    .all(|(a, b)| {
                        let a = if a == b'_' { b'-' } else { a.to_ascii_lowercase() };
                        a == b
                    })
        };

        if eq("full") {
            Ok(VerbosityLevel::Full)
        } else if eq("no-debug") {
            Ok(VerbosityLevel::NoDebug)
        } else if eq("only-error") {
            Ok(VerbosityLevel::OnlyError)
        } else if eq("only-glucose") {
            Ok(VerbosityLevel::OnlyGlucose)
        } else if eq("none") || eq("suppressed") {
            Ok(VerbosityLevel::Suppressed)
        } else {
            Err(OutputError::UnknownVerbosity)
        }
    }
}

/// Raw rank accepted by the formatted write paths.
///
/// Kept apart from [`MessageClass`] so call sites can filter on thresholds
/// outside the four classes. Values outside 0..=3 are compared numerically
/// and nothing more: a rank above 4 passes even a suppressed writer, a
/// negative one never passes. Picking a sensible rank is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(i32);

impl Rank {
    pub const fn new(raw: i32) -> Self {
        Rank(raw)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// Forwarding test against a verbosity threshold.
    pub fn passes(self, level: VerbosityLevel) -> bool {
        self.0 >= i32::from(level.rank())
    }
}

impl From<MessageClass> for Rank {
    fn from(class: MessageClass) -> Self {
        Rank(i32::from(class.rank()))
    }
}

/// `true` when a message of `class` is forwarded under `level`.
pub fn should_forward(class: MessageClass, level: VerbosityLevel) -> bool {
    class.rank() >= level.rank()
}
