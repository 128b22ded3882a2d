//! Interactive prompt loop over a loaded [`Dictionary`].
//!
//! Reads from any `BufRead` and writes to any `Write`, so the binary drives it
//! with stdin/stdout and tests drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::dictionary::dictionary::Dictionary;
use crate::dictionary::trie::Candidate;

pub const QUERY_PROMPT: &str = "Enter a prefix/pattern to search for:";
pub const COUNT_PROMPT: &str = "Enter a number of completions:";
pub const CONTINUE_PROMPT: &str = "Continue? (y/n)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One word per line.
    Lines,
    /// One JSON array of `{word, freq}` objects per query.
    Json,
}

pub struct Session<'d, R, W> {
    dictionary: &'d Dictionary,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<'d, R: BufRead, W: Write> Session<'d, R, W> {
    pub fn new(dictionary: &'d Dictionary, input: R, output: W, format: OutputFormat) -> Self {
        Session { dictionary, input, output, format }
    }

    /// Runs until an answer does not start with `y` or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", QUERY_PROMPT)?;
            let query = match self.read_line()? {
                Some(query) => query,
                None => return Ok(()),
            };

            writeln!(self.output, "{}", COUNT_PROMPT)?;
            let count = match self.read_line()? {
                Some(count) => count,
                None => return Ok(()),
            };

            match count.trim().parse::<usize>() {
                Ok(n) => {
                    let results = self.dictionary.complete(&query, n);
                    write_results(&mut self.output, &results, self.format)?;
                }
                Err(_) => writeln!(self.output, "Invalid number of completions: {}", count.trim())?,
            }

            writeln!(self.output, "{}", CONTINUE_PROMPT)?;
            match self.read_line()? {
                Some(answer) if answer.trim_start().starts_with('y') => continue,
                _ => return Ok(()),
            }
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Ok(Some(trimmed.to_string()))
    }
}

pub fn write_results<W: Write>(output: &mut W, results: &[Candidate], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for candidate in results {
                writeln!(output, "{}", candidate.word)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, results)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
