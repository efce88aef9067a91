//! Output formatting for solution results

use aoc_solver::{SolutionRegistry, SolveError};
use chrono::TimeDelta;

/// Output formatter for solution results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print every registered solution, ordered by key
    pub fn print_list(&self, registry: &SolutionRegistry) {
        for descriptor in registry.all() {
            if self.quiet {
                println!("{}", descriptor.key());
            } else {
                println!("{} {}", descriptor.key(), descriptor.implementation().name);
            }
        }
        if !self.quiet {
            println!("{} solution(s) registered", registry.len());
        }
    }

    /// Print the time spent loading the input
    pub fn print_input(&self, year: i32, day: i32, duration: TimeDelta) {
        if !self.quiet {
            println!("{}/{:02} input loaded in {}", year, day, format_duration(duration));
        }
    }

    /// Format and print the answer to one part
    pub fn print_part(
        &self,
        year: i32,
        day: i32,
        part: char,
        answer: &Result<i64, SolveError>,
        duration: TimeDelta,
    ) {
        match answer {
            Ok(answer) if self.quiet => println!("{}", answer),
            Ok(answer) => println!(
                "{}/{:02} Part {}: {} (solve: {})",
                year,
                day,
                part,
                answer,
                format_duration(duration)
            ),
            Err(e) => eprintln!("{}/{:02} Part {}: Error - {}", year, day, part, e),
        }
    }
}

/// Elapsed time since `start` as a TimeDelta
pub fn elapsed_since(start: std::time::Instant) -> TimeDelta {
    TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX)
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_250)), "2.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-40)), "-40µs");
        assert_eq!(format_duration(TimeDelta::MAX), "N/A");
    }
}
