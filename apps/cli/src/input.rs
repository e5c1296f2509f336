//! # Validated Input Reader
//!
//! Turns raw lines from an interactive stream into typed values.
//!
//! ## Read Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read_non_negative_integer / read_non_negative_float / read_name       │
//! │                                                                         │
//! │   ┌──► read one bounded line ── EOF ──► Err(InputError::EndOfInput)    │
//! │   │         │                                                           │
//! │   │         ▼                                                           │
//! │   │    truncated? ── yes ──► re-prompt ───────────────────────┐        │
//! │   │         │ no                                               │        │
//! │   │         ▼                                                  │        │
//! │   │    stock_core grammar ── ValidationError ──► re-prompt ───┤        │
//! │   │         │ ok                                               │        │
//! │   │         ▼                                                  │        │
//! │   │      Ok(value)                                             │        │
//! │   └────────────────────────────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reader is generic over `BufRead` + `Write`, so the same code runs on
//! locked stdin/stdout and on in-memory buffers in tests.

use std::io::{BufRead, ErrorKind, Write};
use std::str::Utf8Error;
use tracing::debug;

use crate::error::InputError;
use stock_core::validation::{
    parse_non_negative_integer, parse_non_negative_price, validate_product_name,
};
use stock_core::{MAX_INPUT_LEN, MAX_NAME_LEN};

pub const INVALID_INTEGER_PROMPT: &str = "Invalid input. Please enter a non-negative integer: ";
pub const NEGATIVE_INTEGER_PROMPT: &str =
    "Negative values are not allowed. Please enter an integer >= 0: ";
pub const INVALID_PRICE_PROMPT: &str = "Invalid input. Please enter a valid price (e.g. 12.50): ";
pub const INVALID_NAME_PROMPT: &str = "The name cannot be empty. Please enter a name: ";
pub const INVALID_TEXT_PROMPT: &str = "Input is not valid UTF-8. Please try again: ";

/// One line as read from the stream, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BoundedLine {
    bytes: Vec<u8>,
    /// The line was longer than the limit; the rest was discarded.
    truncated: bool,
}

impl BoundedLine {
    /// Decodes the line as UTF-8 without substituting anything.
    ///
    /// A multi-byte character split by the cut is dropped. Any other invalid
    /// sequence is an error.
    fn into_text(self) -> Result<String, Utf8Error> {
        match String::from_utf8(self.bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                let cause = err.utf8_error();
                if !self.truncated || cause.error_len().is_some() {
                    return Err(cause);
                }
                let mut bytes = err.into_bytes();
                bytes.truncate(cause.valid_up_to());
                String::from_utf8(bytes).map_err(|e| e.utf8_error())
            }
        }
    }
}

/// Line-oriented reader that validates what the user types.
#[derive(Debug)]
pub struct InputReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InputReader { input, output }
    }

    /// The prompt/output sink, for callers rendering their own text.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Borrows both halves at once (used by the terminal's pause).
    pub fn parts(&mut self) -> (&mut R, &mut W) {
        (&mut self.input, &mut self.output)
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes `message` without a newline and flushes it.
    pub fn prompt(&mut self, message: &str) -> Result<(), InputError> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line of at most `max_length` bytes.
    ///
    /// The trailing newline (`\n` or `\r\n`) is stripped. If the line is
    /// longer than `max_length`, it is cut at the last character boundary
    /// that fits and the rest of the line is discarded. A line that is not
    /// valid UTF-8 is refused and the user is asked again.
    ///
    /// ## Errors
    /// Only `EndOfInput` or `Io`; any well-formed text is a valid line here.
    pub fn read_line(&mut self, max_length: usize) -> Result<String, InputError> {
        loop {
            match self.read_bounded(max_length)?.into_text() {
                Ok(text) => return Ok(text),
                Err(err) => {
                    debug!(error = %err, "Rejected line with invalid UTF-8");
                    self.prompt(INVALID_TEXT_PROMPT)?;
                }
            }
        }
    }

    /// Reads one raw line, keeping at most `max_length + 1` bytes in memory.
    ///
    /// The extra byte lets a `\r` sitting right at the limit be recognized
    /// as part of a `\r\n` terminator.
    fn read_bounded(&mut self, max_length: usize) -> Result<BoundedLine, InputError> {
        let cap = max_length.saturating_add(1);
        let mut bytes = Vec::new();
        let mut overflow = false;
        let mut terminated = false;
        let mut read_any = false;

        while !terminated {
            let available = match self.input.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if available.is_empty() {
                break;
            }
            read_any = true;

            let newline = available.iter().position(|&b| b == b'\n');
            let content = &available[..newline.unwrap_or(available.len())];
            let room = cap - bytes.len();
            if content.len() > room {
                overflow = true;
            }
            bytes.extend_from_slice(&content[..content.len().min(room)]);

            let used = newline.map_or(available.len(), |i| i + 1);
            terminated = newline.is_some();
            self.input.consume(used);
        }

        if !read_any {
            return Err(InputError::EndOfInput);
        }

        if terminated && !overflow && bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let truncated = overflow || bytes.len() > max_length;
        if truncated {
            bytes.truncate(max_length);
            debug!(kept = max_length, "Discarded the remainder of an over-long line");
        }

        Ok(BoundedLine { bytes, truncated })
    }

    /// Reads until the user enters a whole-line integer >= 0.
    pub fn read_non_negative_integer(&mut self) -> Result<i64, InputError> {
        loop {
            let line = self.read_bounded(MAX_INPUT_LEN)?;
            if line.truncated {
                self.prompt(INVALID_INTEGER_PROMPT)?;
                continue;
            }
            let Ok(text) = line.into_text() else {
                self.prompt(INVALID_INTEGER_PROMPT)?;
                continue;
            };

            match parse_non_negative_integer(&text) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_negative() => {
                    debug!(error = %err, "Rejected negative integer");
                    self.prompt(NEGATIVE_INTEGER_PROMPT)?;
                }
                Err(err) => {
                    debug!(error = %err, "Rejected integer input");
                    self.prompt(INVALID_INTEGER_PROMPT)?;
                }
            }
        }
    }

    /// Reads until the user enters a price made of digits and at most one
    /// decimal point.
    ///
    /// Bad lines are re-prompted; this reader never gives up on malformed
    /// input, only on the end of the stream.
    pub fn read_non_negative_float(&mut self) -> Result<f64, InputError> {
        loop {
            let line = self.read_bounded(MAX_INPUT_LEN)?;
            if line.truncated {
                self.prompt(INVALID_PRICE_PROMPT)?;
                continue;
            }
            let Ok(text) = line.into_text() else {
                self.prompt(INVALID_PRICE_PROMPT)?;
                continue;
            };

            match parse_non_negative_price(&text) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(error = %err, "Rejected price input");
                    self.prompt(INVALID_PRICE_PROMPT)?;
                }
            }
        }
    }

    /// Reads until the user enters a non-blank product name.
    ///
    /// Names longer than [`MAX_NAME_LEN`] are truncated like any other line.
    pub fn read_name(&mut self) -> Result<String, InputError> {
        loop {
            let name = self.read_line(MAX_NAME_LEN)?;
            match validate_product_name(&name) {
                Ok(()) => return Ok(name),
                Err(err) => {
                    debug!(error = %err, "Rejected product name");
                    self.prompt(INVALID_NAME_PROMPT)?;
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
