//! CLI output formatting utilities.
//!
//! This module provides utilities for formatting CLI output including:
//! - Console banners framing the interactive run
//! - JSON syntax highlighting

use std::io::{self, Write};

use colored::Colorize;

use crate::constants::BANNER_WIDTH;
use crate::pipeline::GenerateReport;

/// Returns the `=` rule used above and below banners.
#[must_use]
pub fn rule() -> String { "=".repeat(BANNER_WIDTH) }

/// Prints `title` framed by rules.
pub fn print_banner(title: &str) {
    let rule = rule();
    println!("{rule}");
    println!("{}", title.bold());
    println!("{rule}");
}

/// Prints the closing lines of a pipeline run.
pub fn print_summary(report: &GenerateReport) {
    let rule = rule();
    println!("\n{rule}");
    if report.applied {
        println!("{}", "Done! Your desktop wallpaper has been updated.".green());
    } else {
        println!("{} {}", "Done! Wallpaper saved to".green(), report.path.display());
    }
    println!("{rule}");
}

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: White (default)
pub fn print_highlighted_json(value: &serde_json::Value) {
    let mut stdout = io::stdout().lock();
    if let Err(err) = write_highlighted_json(value, &mut stdout) {
        tracing::debug!(error = %err, "failed to write JSON to stdout");
    }
}

/// Writes pretty-printed, highlighted JSON to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_highlighted_json(value: &serde_json::Value, out: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());

    let mut in_string = false;
    let mut is_key = false;
    let mut escape_next = false;
    let mut after_colon = false;
    let mut token = String::new();

    for ch in json.chars() {
        if escape_next {
            token.push(ch);
            escape_next = false;
            continue;
        }

        if ch == '\\' && in_string {
            token.push(ch);
            escape_next = true;
            continue;
        }

        match ch {
            '"' if in_string => {
                token.push(ch);
                if is_key {
                    write!(out, "{}", token.cyan())?;
                } else {
                    write!(out, "{}", token.green())?;
                }
                token.clear();
                in_string = false;
                is_key = false;
            }
            '"' => {
                flush_token(&mut token, after_colon, out)?;
                token.push(ch);
                in_string = true;
                // A string is a key unless it follows a colon
                is_key = !after_colon;
                after_colon = false;
            }
            ':' if !in_string => {
                flush_token(&mut token, false, out)?;
                write!(out, "{}", ":".white())?;
                after_colon = true;
            }
            ',' if !in_string => {
                flush_token(&mut token, after_colon, out)?;
                write!(out, "{}", ",".white())?;
                after_colon = false;
            }
            '{' | '}' | '[' | ']' if !in_string => {
                flush_token(&mut token, after_colon, out)?;
                write!(out, "{}", ch.to_string().white().bold())?;
                after_colon = false;
            }
            _ => token.push(ch),
        }
    }

    flush_token(&mut token, after_colon, out)?;
    writeln!(out)
}

/// Writes the pending token, coloring bare values.
fn flush_token(token: &mut String, is_value: bool, out: &mut impl Write) -> io::Result<()> {
    if token.is_empty() {
        return Ok(());
    }

    let trimmed = token.trim();
    if is_value && !trimmed.is_empty() {
        let start = token.find(|c: char| !c.is_whitespace()).unwrap_or(0);
        let end = token.rfind(|c: char| !c.is_whitespace()).map_or(token.len(), |i| i + 1);
        let (prefix, value, suffix) = (&token[..start], &token[start..end], &token[end..]);

        if matches!(value, "true" | "false" | "null") {
            write!(out, "{prefix}{}{suffix}", value.magenta())?;
        } else if value.parse::<f64>().is_ok() {
            write!(out, "{prefix}{}{suffix}", value.yellow())?;
        } else {
            write!(out, "{token}")?;
        }
    } else {
        write!(out, "{token}")?;
    }

    token.clear();
    Ok(())
}
