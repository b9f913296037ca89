use anyhow::Result;

use super::print_output;
use crate::clock::ClockSample;
use crate::config::Config;
use crate::time_source::TimeSource;

/// Render a clock reading as two lines: time, then date
pub fn format_clock(sample: &ClockSample) -> String {
    format!("{}\n{}\n", sample.time, sample.date)
}

/// Print the current local time and date once
pub fn run(config: &Config, source: &dyn TimeSource) -> Result<()> {
    let sample = ClockSample::from_time_source(source, config);
    tracing::debug!("clock command: {:?}", sample);
    print_output(&format_clock(&sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        let sample = ClockSample {
            time: "09:41".to_string(),
            date: "Mon, 19 Oct".to_string(),
        };
        assert_eq!(format_clock(&sample), "09:41\nMon, 19 Oct\n");
    }
}
