//! Operator-facing text
//!
//! Formats lines into a fixed-size buffer and hands them to the
//! [`TextChannel`]. Lines that do not fit are cut short and logged.

use core::fmt::Write;

use heapless::String;

use crate::config::{LINE_CAPACITY, REPORT_PRECISION};
use crate::io::TextChannel;
use crate::statistics::Statistics;

const RULE: &str = "#########################################";

/// Formats and writes a single line
pub fn write_line_fmt<C: TextChannel>(channel: &mut C, args: core::fmt::Arguments<'_>) {
    let mut line: String<LINE_CAPACITY> = String::new();
    if line.write_fmt(args).is_err() {
        warn!("line longer than {} bytes truncated", LINE_CAPACITY);
    }
    channel.write_line(&line);
}

/// Command overview with the active trigger distance
pub fn write_menu<C: TextChannel>(channel: &mut C, trigger_distance_mm: u16) {
    channel.write_line(RULE);
    channel.write_line("Press 'r' to start measuring");
    channel.write_line("Press 'a' to abort a running measurement");
    channel.write_line("Press 'c' to start calibration");
    channel.write_line("Press 'f' or 'c' again to finish calibration");
    channel.write_line("Press 'd' for debug mode, again for detection-only mode");
    channel.write_line("Press 'x' to reset");
    write_line_fmt(
        channel,
        format_args!("trigger_distance: {}", trigger_distance_mm),
    );
    channel.write_line(RULE);
}

/// Per-poll debug line: distance, elapsed ms since the previous line, crossings
pub fn write_debug_sample<C: TextChannel>(
    channel: &mut C,
    distance_mm: u16,
    elapsed_ms: u64,
    crossings: u32,
) {
    write_line_fmt(
        channel,
        format_args!("{}\t{}\t{}", distance_mm, elapsed_ms, crossings),
    );
}

/// End-of-run report: every semiperiod followed by the summary
pub fn write_run_report<C: TextChannel>(
    channel: &mut C,
    semiperiods_ms: &[u32],
    stats: &Statistics,
) {
    channel.write_line(RULE);
    channel.write_line("Measurements taken:");
    for (index, &ms) in semiperiods_ms.iter().enumerate() {
        write_line_fmt(
            channel,
            format_args!("{}: {:.3} ms", index + 1, f64::from(ms) / 1000.0),
        );
    }
    write_line_fmt(
        channel,
        format_args!("Mean: {:.*} s", REPORT_PRECISION, stats.mean),
    );
    write_line_fmt(
        channel,
        format_args!(
            "Standard deviation: {:.*} s",
            REPORT_PRECISION, stats.std_deviation
        ),
    );
    write_line_fmt(
        channel,
        format_args!("Variance: {:.*} s^2", REPORT_PRECISION, stats.variance),
    );
    channel.write_line(RULE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lines(std::vec::Vec<std::string::String>);

    impl TextChannel for Lines {
        fn read_command(&mut self) -> Option<u8> {
            None
        }
        fn write_line(&mut self, line: &str) {
            self.0.push(line.into());
        }
        fn open(&mut self) {}
        fn close(&mut self) {}
    }

    #[test]
    fn debug_sample_is_tab_separated() {
        let mut lines = Lines::default();
        write_debug_sample(&mut lines, 187, 33, 4);
        assert_eq!(lines.0, ["187\t33\t4"]);
    }

    #[test]
    fn menu_shows_trigger_distance() {
        let mut lines = Lines::default();
        write_menu(&mut lines, 245);
        assert!(lines.0.iter().any(|l| l == "trigger_distance: 245"));
        assert_eq!(lines.0.first().map(|s| s.as_str()), Some(RULE));
        assert_eq!(lines.0.last().map(|s| s.as_str()), Some(RULE));
    }

    #[test]
    fn report_lists_semiperiods_then_summary() {
        let mut lines = Lines::default();
        let samples = [500, 520, 480];
        let stats = Statistics::from_semiperiods(&samples).unwrap();
        write_run_report(&mut lines, &samples, &stats);

        assert_eq!(
            &lines.0[1..8],
            [
                "Measurements taken:",
                "1: 0.500 ms",
                "2: 0.520 ms",
                "3: 0.480 ms",
                "Mean: 0.50000000 s",
                "Standard deviation: 0.01632993 s",
                "Variance: 0.00026667 s^2",
            ]
        );
    }

    #[test]
    fn overlong_line_is_truncated_not_dropped() {
        let mut lines = Lines::default();
        let long = "x".repeat(LINE_CAPACITY * 2);
        write_line_fmt(&mut lines, format_args!("ok {}", long));
        assert_eq!(lines.0.len(), 1);
        assert!(lines.0[0].starts_with("ok "));
        assert!(lines.0[0].len() <= LINE_CAPACITY);
    }
}
