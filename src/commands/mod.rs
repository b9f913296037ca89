pub mod clock;
pub mod format;

use anyhow::{Context, Result};
use std::io::Write;

/// Write a rendered command result to stdout
///
/// Fails with context when stdout is closed, e.g. piped into `head`.
pub fn print_output(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", output).context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
