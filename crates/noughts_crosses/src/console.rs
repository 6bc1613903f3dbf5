//! Line-oriented console abstraction.
//!
//! Everything the game prints or reads goes through [`Console`], so the
//! shell can run against stdin/stdout or against in-memory buffers.

use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Console failure.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// Input reached end-of-file.
    #[display("Console input closed")]
    Closed,
    /// Reading or writing failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Closed => None,
            ConsoleError::Io(err) => Some(err),
        }
    }
}

/// Something that can show text and read a line of input.
pub trait Console {
    /// Writes `text` as-is.
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Writes `prompt` and reads one line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Closed`] at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Writes `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write(text)?;
        self.write("\n")
    }
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the terminal, returning its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Terminal<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.write(prompt)?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::Closed);
        }
        // Invalid UTF-8 becomes replacement characters, which callers reject
        // like any other bad input.
        let line = String::from_utf8_lossy(&raw)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        trace!(%line, "Read line");
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_strips_newline() {
        let mut term = Terminal::new("hello\r\n".as_bytes(), Vec::new());
        assert_eq!(term.prompt("> ").unwrap(), "hello");
        let (_, out) = term.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "> ");
    }

    #[test]
    fn test_prompt_tolerates_invalid_utf8() {
        let input: &[u8] = &[0xff, 0xfe, b'\n', b'5', b'\n'];
        let mut term = Terminal::new(input, Vec::new());
        assert_eq!(term.prompt("> ").unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(term.prompt("> ").unwrap(), "5");
    }

    #[test]
    fn test_prompt_at_eof_is_closed() {
        let mut term = Terminal::new("".as_bytes(), Vec::new());
        assert!(matches!(term.prompt("> "), Err(ConsoleError::Closed)));
    }
}
