//! Console output configuration
//!
//! The verbosity is fixed once at startup and handed to the writer. The
//! compiled-in default is `NoDebug`; the `verbosity-*` Cargo features select
//! another one (set `verbosity-suppressed` when no serial monitor is
//! connected). If several are enabled the most restrictive wins.

use crate::output::VerbosityLevel;

/// Pause substituted for a suppressed line or formatted write, roughly what
/// the skipped serial write would have taken.
pub const SKIP_DELAY_MS: u32 = 10;

/// Verbosity selected at build time.
pub const DEFAULT_VERBOSITY: VerbosityLevel = if cfg!(feature = "verbosity-suppressed") {
    VerbosityLevel::Suppressed
} else if cfg!(feature = "verbosity-only-glucose") {
    VerbosityLevel::OnlyGlucose
} else if cfg!(feature = "verbosity-only-error") {
    VerbosityLevel::OnlyError
} else if cfg!(feature = "verbosity-no-debug") {
    VerbosityLevel::NoDebug
} else if cfg!(feature = "verbosity-full") {
    VerbosityLevel::Full
} else {
    VerbosityLevel::NoDebug
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub verbosity: VerbosityLevel,
    pub skip_delay_ms: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: DEFAULT_VERBOSITY,
            skip_delay_ms: SKIP_DELAY_MS,
        }
    }
}

impl OutputConfig {
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            ..Default::default()
        }
    }
}

impl From<VerbosityLevel> for OutputConfig {
    fn from(verbosity: VerbosityLevel) -> Self {
        Self::with_verbosity(verbosity)
    }
}
