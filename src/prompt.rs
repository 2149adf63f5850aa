//! Interactive prompting
//!
//! Prompts render on stderr so stdout stays clean for derived output. The
//! `Prompter` trait keeps command handlers testable without a TTY.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Interactive input source for command handlers
pub trait Prompter {
    /// Ask the user to pick one of `options`, returning its index
    ///
    /// # Errors
    /// Returns an error if the input stream is closed or unreadable.
    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize>;

    /// Ask the user for a free-text line
    ///
    /// # Errors
    /// Returns an error if the input stream is closed or unreadable.
    fn input(&mut self, message: &str) -> Result<String>;
}

/// Prompter backed by stdin/stderr
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line() -> Result<String> {
        let mut line = String::new();
        let bytes = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if bytes == 0 {
            anyhow::bail!("Input stream closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize> {
        let mut stderr = std::io::stderr().lock();
        loop {
            writeln!(stderr, "{message}")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(stderr, "  {}) {option}", i + 1)?;
            }
            write!(stderr, "> ")?;
            stderr.flush()?;

            let answer = Self::read_line()?;
            let answer = answer.trim();

            // Accept either the option number or its literal text
            if let Some(index) = options.iter().position(|o| *o == answer) {
                return Ok(index);
            }
            if let Ok(number) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&number) {
                    return Ok(number - 1);
                }
            }
            writeln!(
                stderr,
                "Please answer with a number between 1 and {}.",
                options.len()
            )?;
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let mut stderr = std::io::stderr().lock();
        write!(stderr, "{message} ")?;
        stderr.flush()?;
        Self::read_line()
    }
}
