//! Interactive command loop.
//!
//! Reads one command per line, runs it against the address book, and writes
//! the reply. Command errors are printed and the loop carries on; only I/O
//! failures on the terminal end the session early.

use crate::commands::{execute, parse_input, Reply};
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Source of the current date, swappable in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Runs a session over any line reader and writer.
pub struct Shell<C: Clock = SystemClock> {
    clock: C,
}

impl Shell<SystemClock> {
    /// A shell reading the date from the local clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for Shell<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Shell<C> {
    /// A shell reading the date from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Run until an exit command or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and handled like
    /// any other input, so they surface as command errors.
    pub fn run<R, W>(
        &self,
        mut input: R,
        mut output: W,
        book: &mut AddressBook,
    ) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("End of input, closing session");
                writeln!(output)?;
                break;
            }
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');

            let outcome =
                parse_input(line).and_then(|command| execute(command, book, self.clock.today()));

            match outcome {
                Ok(Reply::Continue(message)) => writeln!(output, "{}", message)?,
                Ok(Reply::Exit(message)) => {
                    writeln!(output, "{}", message)?;
                    break;
                }
                Err(e) => {
                    tracing::debug!(error = ?e, input = %line, "Command failed");
                    writeln!(output, "{}", e)?;
                }
            }
        }

        Ok(())
    }
}
