//! Console prompts with validation.
//!
//! Every question goes through [`Prompter::prompt_until_valid`]: the prompt is
//! printed with its default, empty input selects the default, and anything the
//! validator rejects prints the validator's message and asks again. End of
//! input also selects the default, so a run with stdin closed or piped from a
//! file still completes.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use super::types::Color;

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub const fn new(input: R, output: W) -> Self { Self { input, output } }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W { self.output }

    /// Writes a line to the output stream.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn say(&mut self, line: &str) -> io::Result<()> { writeln!(self.output, "{line}") }

    /// Prints `prompt` and reads one trimmed line.
    ///
    /// # Returns
    ///
    /// `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Asks until `validate` accepts the answer.
    ///
    /// Empty input and end of input return `default` without calling the
    /// validator. A rejected answer prints the validator's message and the
    /// question is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail.
    pub fn prompt_until_valid<T, F>(&mut self, prompt: &str, default: T, validate: F) -> io::Result<T>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(default);
            };

            if answer.is_empty() {
                return Ok(default);
            }

            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(&message)?,
            }
        }
    }

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail.
    pub fn ask_yes_no(&mut self, label: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        self.prompt_until_valid(&format!("{label} [{hint}]: "), default, validate_yes_no)
    }

    /// Asks for a color in `R,G,B` format.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail.
    pub fn ask_color(&mut self, label: &str, default: Color) -> io::Result<Color> {
        self.prompt_until_valid(&format!("{label} (R,G,B) [{default}]: "), default, |answer| {
            answer.parse::<Color>()
        })
    }

    /// Asks for an integer within `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail.
    pub fn ask_number(
        &mut self,
        label: &str,
        default: u32,
        range: RangeInclusive<u32>,
    ) -> io::Result<u32> {
        self.prompt_until_valid(&format!("{label} [{default}]: "), default, |answer| {
            validate_number(answer, &range)
        })
    }
}

/// Accepts `y`, `yes`, `n` and `no` in any case.
///
/// # Errors
///
/// Returns the reprompt message for anything else.
pub fn validate_yes_no(answer: &str) -> Result<bool, String> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Please enter 'y' or 'n'".to_string()),
    }
}

/// Accepts an integer inside `range`.
///
/// # Errors
///
/// Returns the reprompt message for non-integers and out-of-range values.
pub fn validate_number(answer: &str, range: &RangeInclusive<u32>) -> Result<u32, String> {
    let value = answer.trim().parse::<i64>().map_err(|_| "Please enter a valid number".to_string())?;

    u32::try_from(value).ok().filter(|value| range.contains(value)).ok_or_else(|| {
        format!("Please enter a number between {} and {}", range.start(), range.end())
    })
}
