//! Solver construction and query execution

use crate::config::{Config, Problem};
use crate::error::CliError;
use crate::output::{FormatSolution, OutputFormatter, QueryResult, RunSummary};
use chrono::Utc;
use dp_solver::{ConstructionError, Fibonacci, Knapsack, RodCutting, Solver, signed_point};

/// Construct the configured solver and answer every query
pub fn run(config: &Config) -> Result<(), CliError> {
    let strategy = config.strategy;
    match &config.problem {
        Problem::Fibonacci { bound } => solve(config, || Fibonacci::new(*bound, strategy)),
        Problem::RodCutting { prices, length } => {
            solve(config, || RodCutting::new(prices, *length, strategy))
        }
        Problem::Knapsack {
            weights,
            values,
            capacity,
        } => solve(config, || Knapsack::new(weights, values, *capacity, strategy)),
    }
}

fn solve<S, F>(config: &Config, build: F) -> Result<(), CliError>
where
    S: Solver,
    S::Solution: FormatSolution,
    F: FnOnce() -> Result<S, ConstructionError>,
{
    let construction_start = Utc::now();
    let solver = build()?;
    let construction = Utc::now() - construction_start;

    let formatter = OutputFormatter::new(config.quiet);
    let results: Vec<QueryResult> = config
        .queries
        .iter()
        .map(|&point| query(&solver, point))
        .collect();
    for result in &results {
        formatter.print_result(result);
    }

    if config.show_table {
        formatter.print_table(&solver);
    }

    let summary = RunSummary {
        problem: config.problem.name(),
        strategy: solver.strategy(),
        bound: solver.maximum_computed_bound(),
        construction,
    };
    formatter.print_summary(&summary, &results);

    Ok(())
}

/// Answer one signed query point
pub fn query<S>(solver: &S, point: i64) -> QueryResult
where
    S: Solver,
    S::Solution: FormatSolution,
{
    let answer = signed_point(point).and_then(|p| {
        let value = solver.value(p)?;
        let solution = solver.solution(p).map(|s| s.format_solution());
        Ok((value, solution))
    });
    QueryResult { point, answer }
}
