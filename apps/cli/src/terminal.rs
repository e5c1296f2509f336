//! # Terminal Capabilities
//!
//! Screen clearing and "press Enter" pauses, behind a trait so the menu never
//! shells out to platform commands and tests can run without a TTY.

use std::io::{self, BufRead, Write};

pub const PAUSE_MESSAGE: &str = "\nPress Enter to return to the menu...";

/// Presentation capabilities the menu shell relies on.
pub trait Terminal {
    /// Clears the visible screen.
    fn clear_screen(&mut self, out: &mut dyn Write) -> io::Result<()>;

    /// Waits for the user to acknowledge the last output.
    ///
    /// End of input counts as acknowledged; the menu notices it on its next
    /// read.
    fn pause(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(PAUSE_MESSAGE.as_bytes())?;
        out.flush()?;

        let mut discarded = Vec::new();
        input.read_until(b'\n', &mut discarded)?;
        Ok(())
    }
}

/// ANSI/VT100 terminal: clears with `ESC[2J` and homes the cursor.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiTerminal;

impl Terminal for AnsiTerminal {
    fn clear_screen(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"\x1B[2J\x1B[1;1H")?;
        out.flush()
    }
}

/// Terminal for piped or scripted sessions: nothing is cleared.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTerminal;

impl Terminal for PlainTerminal {
    fn clear_screen(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ansi_clear_writes_escape_sequence() {
        let mut out = Vec::new();
        AnsiTerminal.clear_screen(&mut out).unwrap();
        assert_eq!(out, b"\x1B[2J\x1B[1;1H");
    }

    #[test]
    fn test_plain_clear_writes_nothing() {
        let mut out = Vec::new();
        PlainTerminal.clear_screen(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_pause_consumes_one_line() {
        let mut input = Cursor::new(b"\nremaining\n".to_vec());
        let mut out = Vec::new();

        PlainTerminal.pause(&mut input, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), PAUSE_MESSAGE);
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "remaining\n");
    }

    #[test]
    fn test_pause_tolerates_end_of_input() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        assert!(PlainTerminal.pause(&mut input, &mut out).is_ok());
    }
}
