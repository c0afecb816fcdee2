//! Line-oriented prompts over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::SeedError;

/// Interactive console: questions and status lines go to `output`,
/// answers are read one line at a time from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Print `question` without a newline and read the answer.
    ///
    /// The trailing newline is stripped; end of input yields an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for a number, failing with [`SeedError::InvalidNumber`] if the
    /// answer does not parse.
    pub fn ask_number<T: FromStr>(&mut self, question: &str) -> Result<T, SeedError> {
        let answer = self.ask(question)?;
        parse_number(&answer)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a trimmed integer answer.
pub fn parse_number<T: FromStr>(answer: &str) -> Result<T, SeedError> {
    answer
        .trim()
        .parse()
        .map_err(|_| SeedError::InvalidNumber(answer.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert_matches::assert_matches;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_echoes_question_and_strips_newline() {
        let mut console = console("hello\r\nnext\n");
        assert_eq!(console.ask("Name: ").unwrap(), "hello");
        assert_eq!(console.ask("Again: ").unwrap(), "next");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Name: Again: ");
    }

    #[test]
    fn eof_reads_as_empty() {
        let mut console = console("");
        assert_eq!(console.ask("? ").unwrap(), "");
    }

    #[test]
    fn numbers_are_trimmed() {
        let mut console = console("  42 \n");
        let n: i32 = console.ask_number("N: ").unwrap();
        assert_eq!(n, 42);
    }

    #[test]
    fn garbage_is_invalid_number() {
        assert_matches!(parse_number::<i64>("12abc"), Err(SeedError::InvalidNumber(s)) if s == "12abc");
        assert_matches!(parse_number::<i64>(""), Err(SeedError::InvalidNumber(_)));
        assert_matches!(parse_number::<i64>("-5"), Ok(-5));
    }
}
