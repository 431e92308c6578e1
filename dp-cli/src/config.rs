//! Configuration resolution from CLI args

use crate::cli::{Args, Command};
use crate::error::CliError;
use dp_solver::{Strategy, signed_bound};
use std::path::Path;

/// Problem instance with its inputs converted to table types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Fibonacci {
        bound: usize,
    },
    RodCutting {
        prices: Vec<u64>,
        length: usize,
    },
    /// Weights and values stay separate so a length mismatch surfaces as a
    /// construction error
    Knapsack {
        weights: Vec<usize>,
        values: Vec<u64>,
        capacity: usize,
    },
}

impl Problem {
    /// Command name used in the summary
    pub fn name(&self) -> &'static str {
        match self {
            Problem::Fibonacci { .. } => "fibonacci",
            Problem::RodCutting { .. } => "rod-cutting",
            Problem::Knapsack { .. } => "knapsack",
        }
    }

    /// Construction bound, the default query point
    pub fn bound(&self) -> usize {
        match self {
            Problem::Fibonacci { bound } => *bound,
            Problem::RodCutting { length, .. } => *length,
            Problem::Knapsack { capacity, .. } => *capacity,
        }
    }
}

/// Resolved runtime configuration
pub struct Config {
    /// Problem to construct
    pub problem: Problem,
    /// Fill strategy
    pub strategy: Strategy,
    /// Points to query, still signed so negative points fail per query
    pub queries: Vec<i64>,
    /// Whether to print the internal tables
    pub show_table: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Whether to install a log subscriber
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args, reading any input file
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let problem = match args.command {
            Command::Fibonacci { bound } => Problem::Fibonacci {
                bound: signed_bound(bound)?,
            },
            Command::RodCutting {
                length,
                prices,
                input,
            } => {
                let prices = match input {
                    Some(path) => read_prices(&path)?,
                    None => unsigned_values(&prices, "price")?,
                };
                Problem::RodCutting {
                    prices,
                    length: signed_bound(length)?,
                }
            }
            Command::Knapsack {
                capacity,
                weights,
                values,
                input,
            } => {
                let (weights, values) = match input {
                    Some(path) => read_items(&path)?,
                    None => (
                        unsigned_values(&weights, "weight")?,
                        unsigned_values(&values, "value")?,
                    ),
                };
                Problem::Knapsack {
                    weights,
                    values,
                    capacity: signed_bound(capacity)?,
                }
            }
        };

        let queries = if args.query.is_empty() {
            let bound = i64::try_from(problem.bound())
                .map_err(|_| CliError::Config(format!("Bound {} is too large", problem.bound())))?;
            vec![bound]
        } else {
            args.query
        };

        Ok(Config {
            problem,
            strategy: args.strategy.into(),
            queries,
            show_table: args.show_table,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Convert signed command-line numbers, naming the first negative one
fn unsigned_values<T: TryFrom<i64>>(raw: &[i64], what: &str) -> Result<Vec<T>, CliError> {
    raw.iter()
        .map(|&n| {
            T::try_from(n).map_err(|_| CliError::Input(format!("Invalid {}: {}", what, n)))
        })
        .collect()
}

/// Read prices separated by whitespace or commas
fn read_prices(path: &Path) -> Result<Vec<u64>, CliError> {
    let contents = std::fs::read_to_string(path)?;
    parse_prices(&contents).map_err(|e| CliError::Input(format!("{}: {}", path.display(), e)))
}

fn parse_prices(contents: &str) -> Result<Vec<u64>, String> {
    contents
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse()
                .map_err(|_| format!("invalid price '{}'", token))
        })
        .collect()
}

/// Read `weight value` pairs, one per line
fn read_items(path: &Path) -> Result<(Vec<usize>, Vec<u64>), CliError> {
    let contents = std::fs::read_to_string(path)?;
    parse_items(&contents).map_err(|e| CliError::Input(format!("{}: {}", path.display(), e)))
}

fn parse_items(contents: &str) -> Result<(Vec<usize>, Vec<u64>), String> {
    let mut weights = Vec::new();
    let mut values = Vec::new();

    for (number, line) in contents.lines().enumerate() {
        // Strip comments
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [weight, value] = fields[..] else {
            return Err(format!(
                "line {}: expected 'weight value', got '{}'",
                number + 1,
                line
            ));
        };
        weights.push(
            weight
                .parse()
                .map_err(|_| format!("line {}: invalid weight '{}'", number + 1, weight))?,
        );
        values.push(
            value
                .parse()
                .map_err(|_| format!("line {}: invalid value '{}'", number + 1, value))?,
        );
    }

    Ok((weights, values))
}
