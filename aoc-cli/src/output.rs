//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::FactoryInfo;
use chrono::TimeDelta;
use std::time::Instant;

/// Prints answers to stdout and failures to stderr
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
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(e), false) => eprintln!("{}: Error - {}", result_prefix(result), e),
        }
    }

    /// Print totals after all results
    ///
    /// Compute time is the sum of parse and solve durations, wall-clock time
    /// is measured from formatter creation.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let solved = || results.iter().filter(|r| r.answer.is_ok());
        let total_parse_time: TimeDelta = solved().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = solved().map(|r| r.solve_duration).sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed));
        if let (Some(compute), Some(wall)) = (
            total_compute_time.num_microseconds(),
            elapsed.num_microseconds(),
        ) && wall > 0
        {
            println!("Speedup factor: {:.2}x", compute as f64 / wall as f64);
        }
    }

    /// Print the registry contents for `--list`
    pub fn print_listing(&self, solvers: &[FactoryInfo]) {
        for info in solvers {
            if self.quiet {
                println!("{}/{:02}", info.year, info.day);
            } else {
                println!(
                    "{}/{:02}  parts: {}  tags: {}",
                    info.year,
                    info.day,
                    info.parts,
                    info.tags.join(",")
                );
            }
        }
        if !self.quiet {
            println!("{} solver(s) registered", solvers.len());
        }
    }
}

fn result_prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)` for a successful result
fn format_result(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or_default();
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {} ({}solve: {})",
        result_prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

/// Human-scaled duration: µs below a millisecond, ms below a second, else s
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
    fn test_format_duration_scales() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_duration(TimeDelta::MAX), "N/A");
    }

    #[test]
    fn test_format_result_line() {
        let result = SolverResult {
            year: 2023,
            day: 7,
            part: 2,
            answer: Ok("5905".to_string()),
            parse_duration: Some(TimeDelta::microseconds(40)),
            solve_duration: TimeDelta::microseconds(1200),
        };
        assert_eq!(
            format_result(&result),
            "2023/07 Part 2: 5905 (parse: 40µs, solve: 1.20ms)"
        );
    }
}
