use anyhow::Result;

use super::print_output;
use crate::stopwatch::format_time;

/// One `MM:SS.CC` reading per line, in input order
pub fn format_durations(millis: &[u64]) -> String {
    millis
        .iter()
        .map(|m| format!("{}\n", format_time(*m)))
        .collect()
}

/// Print stopwatch readings for the given millisecond counts
pub fn run(millis: &[u64]) -> Result<()> {
    print_output(&format_durations(millis))
}
