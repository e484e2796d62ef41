//! # Console I/O
//!
//! Prompting and parsing over any `BufRead` / `Write` pair, so menus run the
//! same against a terminal and against an in-memory script.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

/// Date format typed at prompts.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes `prompt` and reads one line, without its line ending.
    ///
    /// Returns `EndOfInput` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads and parses one value; `field` names it in the error.
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> AppResult<T> {
        self.ask(prompt)?
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidInput(field))
    }

    /// Reads a `yyyy-mm-dd` date.
    pub fn ask_date(&mut self, prompt: &str, field: &'static str) -> AppResult<NaiveDate> {
        let text = self.ask(prompt)?;
        NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| AppError::InvalidInput(field))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
