//! Output formatting for query results

use chrono::TimeDelta;
use dp_solver::{RangeError, Strategy};
use itertools::Itertools;
use std::fmt::Display;

/// Renders a reconstructed solution on one line
pub trait FormatSolution {
    fn format_solution(&self) -> String;
}

/// Preceding pair of a two-term recurrence
impl FormatSolution for (u64, u64) {
    fn format_solution(&self) -> String {
        format!("({}, {})", self.0, self.1)
    }
}

/// Piece lengths or selected items
impl<T: Display> FormatSolution for Vec<T> {
    fn format_solution(&self) -> String {
        format!("[{}]", self.iter().join(", "))
    }
}

/// Answer to one query point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// The point as given on the command line
    pub point: i64,
    /// The optimum and its rendered solution; a point can have a value but
    /// no solution
    pub answer: Result<(u64, Result<String, RangeError>), RangeError>,
}

/// Facts about one solver run for the summary
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub problem: &'static str,
    pub strategy: Strategy,
    pub bound: usize,
    pub construction: TimeDelta,
}

/// Output formatter for query results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &QueryResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (value and solution only)
    fn print_quiet(&self, result: &QueryResult) {
        match &result.answer {
            Ok((value, Ok(solution))) => println!("{}\t{}", value, solution),
            Ok((value, Err(e))) => {
                println!("{}", value);
                eprintln!("Error: {}", e);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output naming the query point
    fn print_full(&self, result: &QueryResult) {
        let point = result.point;
        match &result.answer {
            Ok((value, Ok(solution))) => {
                println!("value({}) = {}, solution({}) = {}", point, value, point, solution)
            }
            Ok((value, Err(e))) => {
                println!("value({}) = {}", point, value);
                eprintln!("solution({}): Error - {}", point, e);
            }
            Err(e) => eprintln!("value({}): Error - {}", point, e),
        }
    }

    /// Print the solver's table rendering
    pub fn print_table(&self, table: &impl Display) {
        if !self.quiet {
            println!();
        }
        println!("{}", table);
    }

    /// Print a summary after all results
    pub fn print_summary(&self, summary: &RunSummary, results: &[QueryResult]) {
        if self.quiet {
            return;
        }

        let answered = results.iter().filter(|r| r.answer.is_ok()).count();
        let failed = results.len() - answered;

        println!();
        println!("--- Summary ---");
        println!(
            "Problem: {} ({}), bound {}",
            summary.problem, summary.strategy, summary.bound
        );
        println!("Queries: {} answered, {} failed", answered, failed);
        println!(
            "Construction time: {}",
            format_duration(summary.construction)
        );
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
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
