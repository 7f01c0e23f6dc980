//! Interactive prompts for city, time filter, and paging decisions.
//!
//! Reads from any [`BufRead`] and writes to any [`Write`] so the dialogs
//! are unit-testable; the binary wires them to stdin/stdout. Every prompt
//! loops until it gets a valid token, so downstream components only ever
//! see validated lowercase strings.

use std::io::{self, BufRead, Write};

use crate::catalog::DatasetCatalog;
use crate::filter::MONTHS;

const DAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Asks for city, month, and day in turn. The returned strings are
    /// lowercase and guaranteed valid: `city` is a catalog key, `month`
    /// is `all` or a month name, `day` is `all` or a weekday name.
    pub fn filters(&mut self, catalog: &DatasetCatalog) -> io::Result<(String, String, String)> {
        let city = self.city(catalog)?;
        let month = self.month()?;
        let day = self.day()?;
        Ok((city, month, day))
    }

    pub fn city(&mut self, catalog: &DatasetCatalog) -> io::Result<String> {
        let cities: Vec<&str> = catalog.cities().collect();
        loop {
            writeln!(self.output, "Please choose a city to get data from.")?;
            writeln!(self.output, "Options: {}", cities.join(", "))?;
            let answer = self.read_token()?;
            if cities.contains(&answer.as_str()) {
                return Ok(answer);
            }
            writeln!(self.output, "Invalid input!")?;
        }
    }

    pub fn month(&mut self) -> io::Result<String> {
        loop {
            writeln!(self.output, "Please choose a month to get data from.")?;
            writeln!(self.output, "Options: all, {}", MONTHS.join(", "))?;
            let answer = self.read_token()?;
            if answer == "all" || MONTHS.contains(&answer.as_str()) {
                return Ok(answer);
            }
            writeln!(self.output, "Invalid input!")?;
        }
    }

    pub fn day(&mut self) -> io::Result<String> {
        loop {
            writeln!(self.output, "Please choose a day to get data from.")?;
            writeln!(self.output, "Options: all, {}", DAYS.join(", "))?;
            let answer = self.read_token()?;
            if answer == "all" || DAYS.contains(&answer.as_str()) {
                return Ok(answer);
            }
            writeln!(self.output, "Invalid input!")?;
        }
    }

    /// Yes/no question; re-prompts until one or the other.
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            writeln!(self.output, "{prompt}")?;
            match self.read_token()?.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid input! Please type 'yes' or 'no'")?,
            }
        }
    }

    fn read_token(&mut self) -> io::Result<String> {
        write!(self.output, "Your pick: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // stdin closed mid-dialog
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended during prompt",
            ));
        }
        Ok(line.trim().to_lowercase())
    }
}
