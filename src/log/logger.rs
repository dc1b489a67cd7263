//! `log` facade backend writing through a shared filtered console

use core::sync::atomic::{AtomicU8, Ordering};

use ::log::{Log, Metadata, Record};
use embedded_hal::delay::DelayNs;
use spin::Mutex;

use super::class_for;
use crate::output::{should_forward, FilteredConsoleWriter, VerbosityLevel};
use crate::transport::SerialTransport;

/// Routes `log` records onto a [`FilteredConsoleWriter`].
///
/// Records are rendered as `[LEVEL][target] message` plus a line terminator.
/// Filtered records pay the skip delay like any other suppressed line.
///
/// A record raised while the console is already locked (from inside
/// [`with_console`](Self::with_console), or an interrupt landing mid-write)
/// is dropped without the skip delay: the delay provider sits behind the
/// same lock.
pub struct ConsoleLogger<T, D> {
    console: Mutex<FilteredConsoleWriter<T, D>>,
    // verbosity rank readable without the lock
    verbosity: AtomicU8,
}

impl<T: SerialTransport, D: DelayNs> ConsoleLogger<T, D> {
    pub fn new(console: FilteredConsoleWriter<T, D>) -> Self {
        Self {
            verbosity: AtomicU8::new(console.verbosity().rank()),
            console: Mutex::new(console),
        }
    }

    /// Runs `f` with the console locked, for direct writes that should not
    /// interleave with log records. Logging from inside `f` is safe; those
    /// records are dropped.
    pub fn with_console<R>(&self, f: impl FnOnce(&mut FilteredConsoleWriter<T, D>) -> R) -> R {
        let mut console = self.console.lock();
        let out = f(&mut console);
        self.verbosity.store(console.verbosity().rank(), Ordering::Relaxed);
        out
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        VerbosityLevel::try_from(self.verbosity.load(Ordering::Relaxed))
            .unwrap_or(VerbosityLevel::Suppressed)
    }
}

impl<T, D> Log for ConsoleLogger<T, D>
where
    T: SerialTransport + Send,
    D: DelayNs + Send,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_forward(class_for(metadata.level(), metadata.target()), self.verbosity())
    }

    fn log(&self, record: &Record) {
        let class = class_for(record.level(), record.target());
        let Some(mut console) = self.console.try_lock() else {
            return;
        };
        // transport errors have nowhere to go from here
        let _ = console.write_line_formatted(
            class.into(),
            format_args!("[{}][{}] {}", record.level(), record.target(), record.args()),
        );
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::log::GLUCOSE_TARGET;
    use crate::output::{MessageClass, VerbosityLevel};
    use crate::testing::{CaptureTransport, RecordingDelay};
    use ::log::Level;

    fn logger(level: VerbosityLevel) -> ConsoleLogger<CaptureTransport, RecordingDelay> {
        ConsoleLogger::new(FilteredConsoleWriter::new(
            CaptureTransport::default(),
            RecordingDelay::default(),
            OutputConfig::with_verbosity(level),
        ))
    }

    #[test]
    fn renders_forwarded_record() {
        let l = logger(VerbosityLevel::NoDebug);
        l.log(
            &Record::builder()
                .args(format_args!("sensor age {} days", 4))
                .level(Level::Info)
                .target("transmitter")
                .build(),
        );
        let out = l.with_console(|c| c.transport().output());
        assert_eq!(out, "[INFO][transmitter] sensor age 4 days\r\n");
    }

    #[test]
    fn filtered_record_pauses() {
        let l = logger(VerbosityLevel::OnlyError);
        l.log(
            &Record::builder()
                .args(format_args!("notify"))
                .level(Level::Debug)
                .target("ble")
                .build(),
        );
        l.with_console(|c| {
            assert!(c.transport().is_empty());
        });
        let (_, delay) = l.console.into_inner().into_parts();
        assert_eq!(delay.total_ms(), 10);
    }

    #[test]
    fn glucose_target_survives_only_glucose() {
        let l = logger(VerbosityLevel::OnlyGlucose);
        let glucose = Metadata::builder().level(Level::Info).target(GLUCOSE_TARGET).build();
        let error = Metadata::builder().level(Level::Error).target("ble").build();
        assert!(l.enabled(&glucose));
        assert!(!l.enabled(&error));
    }

    #[test]
    fn logging_inside_with_console_returns() {
        let l = logger(VerbosityLevel::Full);
        let meta = Metadata::builder().level(Level::Info).target("ble").build();
        let enabled_inside = l.with_console(|c| {
            l.log(
                &Record::builder()
                    .args(format_args!("nested"))
                    .metadata(meta.clone())
                    .build(),
            );
            let enabled = l.enabled(&meta);
            c.write_text(MessageClass::Data, "direct").unwrap();
            enabled
        });
        // the nested record is dropped, the direct write goes out
        assert!(enabled_inside);
        assert_eq!(l.with_console(|c| c.transport().output()), "direct");
    }

    #[test]
    fn verbosity_change_inside_with_console_reaches_enabled() {
        let l = logger(VerbosityLevel::Full);
        let debug = Metadata::builder().level(Level::Debug).target("ble").build();
        assert!(l.enabled(&debug));
        l.with_console(|c| c.set_verbosity(VerbosityLevel::OnlyError));
        assert_eq!(l.verbosity(), VerbosityLevel::OnlyError);
        assert!(!l.enabled(&debug));
    }

    #[test]
    fn with_console_writes_directly() {
        let l = logger(VerbosityLevel::Full);
        l.with_console(|c| c.write_text(MessageClass::Debug, "raw")).unwrap();
        assert_eq!(l.with_console(|c| c.transport().output()), "raw");
    }
}
