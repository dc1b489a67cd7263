//! Output error taxonomy
//!
//! Only configuration and setup paths produce these. Console writes never do;
//! transport failures are returned as the transport's own error type.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    UnknownVerbosity,
    RankOutOfRange,
    InvalidRadix,
    LoggerAlreadySet,
}

impl OutputError {
    pub fn as_str(self) -> &'static str {
        use OutputError::*;
        match self {
            UnknownVerbosity => "output: unknown verbosity level name",
            RankOutOfRange => "output: verbosity rank out of range (0..=4)",
            InvalidRadix => "output: radix must be within 2..=36",
            LoggerAlreadySet => "output: a global logger is already installed",
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<::log::SetLoggerError> for OutputError {
    fn from(_: ::log::SetLoggerError) -> Self {
        OutputError::LoggerAlreadySet
    }
}
