//! Serial transport boundary
//!
//! The console writer only needs three primitives from the line it drives:
//! raw text, a number in some radix, and a line terminator. Anything that
//! provides them (UART driver, USB-serial, a capture buffer) implements
//! [`SerialTransport`].

use core::fmt;

use heapless::String;

use crate::error::OutputError;

/// Numeric base for [`SerialTransport::write_byte`].
///
/// Base 0 is [`Radix::RAW`]: the byte goes out as-is instead of as digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix(u8);

impl Radix {
    pub const RAW: Radix = Radix(0);
    pub const BIN: Radix = Radix(2);
    pub const OCT: Radix = Radix(8);
    pub const DEC: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    /// Maps a serial print mode onto a radix: 0 is raw, 1 falls back to
    /// decimal, 2..=36 are digit bases. Anything larger is rejected.
    pub fn new(base: u8) -> Result<Self, OutputError> {
        match base {
            0 => Ok(Radix::RAW),
            1 => Ok(Radix::DEC),
            2..=36 => Ok(Radix(base)),
            _ => Err(OutputError::InvalidRadix),
        }
    }

    pub fn base(self) -> u8 {
        self.0
    }

    pub fn is_raw(self) -> bool {
        self.0 == 0
    }

    /// Renders `value` most-significant digit first, digits above 9 as
    /// uppercase letters. No prefix, no padding.
    ///
    /// `RAW` renders the byte as the character with that code point
    /// (Latin-1), which is what a text-only sink can carry.
    pub fn render(self, value: u8) -> String<8> {
        let mut out = String::new();
        if self.is_raw() {
            // at most 2 UTF-8 bytes
            let _ = out.push(char::from(value));
            return out;
        }

        // base 2 is the widest case: 8 digits for a u8
        let mut digits = [0u8; 8];
        let mut len = 0;
        let mut n = value;
        let base = self.0;

        loop {
            let d = n % base;
            digits[len] = if d < 10 { b'0' + d } else { b'A' + d - 10 };
            len += 1;
            n /= base;
            if n == 0 {
                break;
            }
        }

        for &c in digits[..len].iter().rev() {
            // capacity matches the digit buffer
            let _ = out.push(c as char);
        }
        out
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DEC
    }
}

/// The output side of a serial console.
///
/// Errors are the transport's own; callers above this trait pass them through
/// untouched.
pub trait SerialTransport {
    type Error;

    /// Writes `text` as-is, without a terminator.
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Writes `value` encoded as digits in `radix`, or as the byte itself
    /// for [`Radix::RAW`].
    fn write_byte(&mut self, value: u8, radix: Radix) -> Result<(), Self::Error> {
        if radix.is_raw() {
            self.write_raw(value)
        } else {
            self.write_text(&radix.render(value))
        }
    }

    /// Writes one byte unencoded.
    ///
    /// The default can only go through `write_text`, so bytes above 0x7F
    /// come out as their Latin-1 character. Byte-oriented transports should
    /// override this.
    fn write_raw(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_text(&Radix::RAW.render(byte))
    }

    /// Writes one line terminator.
    fn write_line(&mut self) -> Result<(), Self::Error>;

    /// Renders `args` straight onto the line.
    ///
    /// The default streams each formatted piece through `write_text`. A
    /// formatting failure raised by a `Display` impl leaves whatever was
    /// already written and is not reported, since it is not a transport error.
    /// Overrides should keep that behavior.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Self::Error> {
        let mut adapter = TextAdapter {
            inner: self,
            error: None,
        };
        let _ = fmt::write(&mut adapter, args);
        match adapter.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<T: SerialTransport + ?Sized> SerialTransport for &mut T {
    type Error = T::Error;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).write_text(text)
    }

    fn write_byte(&mut self, value: u8, radix: Radix) -> Result<(), Self::Error> {
        (**self).write_byte(value, radix)
    }

    fn write_raw(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_raw(byte)
    }

    fn write_line(&mut self) -> Result<(), Self::Error> {
        (**self).write_line()
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Self::Error> {
        (**self).write_fmt(args)
    }
}

struct TextAdapter<'a, T: SerialTransport + ?Sized> {
    inner: &'a mut T,
    error: Option<T::Error>,
}

impl<T: SerialTransport + ?Sized> fmt::Write for TextAdapter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.inner.write_text(s) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.error = Some(e);
                Err(fmt::Error)
            }
        }
    }
}

/// Line terminator emitted by [`FmtTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `"\r\n"`, what serial monitors expect.
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Transport over any `core::fmt::Write` sink.
#[derive(Debug)]
pub struct FmtTransport<W> {
    sink: W,
    line_ending: LineEnding,
}

impl<W: fmt::Write> FmtTransport<W> {
    pub fn new(sink: W) -> Self {
        Self::with_line_ending(sink, LineEnding::default())
    }

    pub fn with_line_ending(sink: W, line_ending: LineEnding) -> Self {
        Self { sink, line_ending }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: fmt::Write> SerialTransport for FmtTransport<W> {
    type Error = fmt::Error;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.sink.write_str(text)
    }

    fn write_line(&mut self) -> Result<(), Self::Error> {
        self.sink.write_str(self.line_ending.as_str())
    }
}
