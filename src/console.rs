//! Line-oriented console I/O for the interactive menu

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prompts and reads lines over any reader/writer pair
///
/// The binary uses locked stdin/stdout; tests use an in-memory cursor and a
/// byte buffer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print a full line of output
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text).context("Failed to write output")?;
        Ok(())
    }

    /// Print a prompt without a newline and read the answer
    ///
    /// # Returns
    /// The line without its trailing line ending, or `None` once the input is
    /// exhausted
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", text).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush output")?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_line_without_line_ending() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("first\r\nsecond\n"), &mut output);

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").unwrap(), None);
        drop(console);

        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }

    #[test]
    fn test_prompt_keeps_empty_line() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("hello").unwrap();
        assert_eq!(console.into_writer(), b"hello\n");
    }
}
