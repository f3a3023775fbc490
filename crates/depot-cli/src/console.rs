//! Console adapter.
//!
//! All printing and reading done by the driver goes through [`Console`], so
//! the walkthrough can run against in-memory buffers.

use depot_core::{DepartmentId, DepotError, DepotResult};
use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    sections: usize,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            sections: 0,
        }
    }

    /// Writes a section heading, separated from the previous section by a blank line.
    pub fn heading(&mut self, title: impl Display) -> DepotResult<()> {
        if self.sections > 0 {
            writeln!(self.output)?;
        }
        self.sections += 1;
        writeln!(self.output, "=== {} ===", title)?;
        Ok(())
    }

    /// Writes one line.
    pub fn line(&mut self, text: impl Display) -> DepotResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompts for a department id and reads one line.
    ///
    /// Fails with `InvalidInput` at end of input or on anything that is not
    /// a positive integer.
    pub fn prompt_id(&mut self, prompt: impl Display) -> DepotResult<DepartmentId> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(DepotError::invalid_input("no department id was entered"));
        }

        buf.parse()
    }

    /// Consumes the console and returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn test_headings_are_separated() {
        let mut console = console("");
        console.heading("First").unwrap();
        console.line("body").unwrap();
        console.heading("Second").unwrap();

        assert_eq!(output(console), "=== First ===\nbody\n\n=== Second ===\n");
    }

    #[test]
    fn test_prompt_id_reads_one_line() {
        let mut console = console("5\n6\n");
        assert_eq!(console.prompt_id("Id?").unwrap(), DepartmentId(5));
        assert_eq!(console.prompt_id("Id?").unwrap(), DepartmentId(6));
        assert_eq!(output(console), "Id?\nId?\n");
    }

    #[test]
    fn test_prompt_id_at_end_of_input() {
        let mut console = console("");
        let err = console.prompt_id("Id?").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_prompt_id_rejects_text() {
        let mut console = console("abc\n");
        let err = console.prompt_id("Id?").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
