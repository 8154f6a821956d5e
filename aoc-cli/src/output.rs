//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), _) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    ///
    /// Shows both total compute time (sum of durations) and wall-clock time.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.successes, summary.failures
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed));
        if let Some(speedup) = summary.speedup(elapsed) {
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Totals over a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Summary {
    successes: usize,
    failures: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let solved = || results.iter().filter(|r| r.answer.is_ok());
        let successes = solved().count();

        Self {
            successes,
            failures: results.len() - successes,
            parse_time: solved().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved().map(|r| r.solve_duration).sum(),
        }
    }

    /// Compute time over wall-clock time
    fn speedup(&self, elapsed: TimeDelta) -> Option<f64> {
        let elapsed = elapsed.num_microseconds().filter(|&m| m > 0)? as f64;
        let compute = (self.parse_time + self.solve_time).num_microseconds()? as f64;
        Some(compute / elapsed)
    }
}

/// One line per result: `2015/03 Part 1: 2592 (parse: 120µs, solve: 1.20ms)`
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
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
    use crate::error::CliError;
    use std::sync::Arc;

    fn solved(part: u8, parse: Option<i64>, solve: i64) -> SolverResult {
        SolverResult {
            year: 2015,
            day: 3,
            part,
            answer: Ok("2592".to_string()),
            parse_duration: parse.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(solve),
        }
    }

    fn failed(part: u8) -> SolverResult {
        SolverResult {
            year: 2015,
            day: 4,
            part,
            answer: Err(Arc::new(CliError::ChannelSend)),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_duration(TimeDelta::MAX), "N/A");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(
            format_result(&solved(1, Some(120), 1200)),
            "2015/03 Part 1: 2592 (parse: 120µs, solve: 1.20ms)"
        );
        assert_eq!(
            format_result(&solved(2, None, 5)),
            "2015/03 Part 2: 2592 (solve: 5µs)"
        );
        assert_eq!(
            format_result(&failed(1)),
            "2015/04 Part 1: Error - Channel send error"
        );
    }

    #[test]
    fn test_summary_ignores_failed_rows() {
        let results = [solved(1, Some(100), 300), solved(2, None, 600), failed(1)];
        let summary = Summary::of(&results);

        assert_eq!(summary.successes, 2);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.parse_time, TimeDelta::microseconds(100));
        assert_eq!(summary.solve_time, TimeDelta::microseconds(900));
        assert_eq!(summary.speedup(TimeDelta::microseconds(500)), Some(2.0));
        assert_eq!(summary.speedup(TimeDelta::zero()), None);
    }
}
