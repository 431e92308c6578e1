//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use dp_solver::Strategy;
use std::path::PathBuf;

/// Table fill strategy
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum StrategyArg {
    /// Fill every sub-problem in increasing order (default)
    #[default]
    BottomUp,
    /// Resolve only the sub-problems the bound depends on
    TopDown,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BottomUp => Strategy::BottomUp,
            StrategyArg::TopDown => Strategy::TopDown,
        }
    }
}

/// Dynamic-programming solver runner
#[derive(Parser, Debug)]
#[command(
    name = "dpsolve",
    about = "Tabulate optimal-substructure problems and reconstruct their solutions",
    version
)]
pub struct Args {
    /// Fill strategy: bottom-up or top-down
    #[arg(short, long, value_enum, default_value = "bottom-up", global = true)]
    pub strategy: StrategyArg,

    /// Points to query (comma-separated, defaults to the bound)
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        global = true
    )]
    pub query: Vec<i64>,

    /// Print the internal tables after the answers
    #[arg(long, global = true)]
    pub show_table: bool,

    /// Quiet mode - only output answers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log construction spans to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Problem to solve
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Two-term recurrence up to an index
    Fibonacci {
        /// Largest index to tabulate (at least 2)
        #[arg(long, allow_negative_numbers = true)]
        bound: i64,
    },

    /// Best way to cut a rod into priced pieces
    RodCutting {
        /// Longest rod to tabulate
        #[arg(long, allow_negative_numbers = true)]
        length: i64,

        /// Price of a piece of each length, starting at length 0 (comma-separated)
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            conflicts_with = "input",
            required_unless_present = "input"
        )]
        prices: Vec<i64>,

        /// File of whitespace or comma separated prices
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// 0/1 selection of weighted items under a capacity
    Knapsack {
        /// Capacity to tabulate
        #[arg(long, allow_negative_numbers = true)]
        capacity: i64,

        /// Item weights (comma-separated)
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            conflicts_with = "input",
            required_unless_present = "input",
            requires = "values"
        )]
        weights: Vec<i64>,

        /// Item values (comma-separated)
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            conflicts_with = "input",
            requires = "weights"
        )]
        values: Vec<i64>,

        /// File with one `weight value` pair per line
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_knapsack_flags() {
        let args = Args::try_parse_from([
            "dpsolve",
            "--strategy",
            "top-down",
            "knapsack",
            "--capacity",
            "5",
            "--weights",
            "1,2,4,4",
            "--values",
            "3,6,3,5",
        ])
        .unwrap();

        assert_eq!(args.strategy, StrategyArg::TopDown);
        assert!(args.query.is_empty());
        match args.command {
            Command::Knapsack {
                capacity,
                weights,
                values,
                input,
            } => {
                assert_eq!(capacity, 5);
                assert_eq!(weights, vec![1, 2, 4, 4]);
                assert_eq!(values, vec![3, 6, 3, 5]);
                assert!(input.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_negative_numbers_reach_validation() {
        let args = Args::try_parse_from([
            "dpsolve",
            "fibonacci",
            "--bound",
            "-3",
            "--query",
            "-1,4",
        ])
        .unwrap();

        assert_eq!(args.query, vec![-1, 4]);
        assert!(matches!(args.command, Command::Fibonacci { bound: -3 }));
    }

    #[test]
    fn test_prices_and_input_conflict() {
        let result = Args::try_parse_from([
            "dpsolve",
            "rod-cutting",
            "--length",
            "3",
            "--prices",
            "0,1,2,3",
            "--input",
            "prices.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rod_cutting_needs_a_price_source() {
        let result = Args::try_parse_from(["dpsolve", "rod-cutting", "--length", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_strategy_conversion() {
        assert_eq!(Strategy::from(StrategyArg::default()), Strategy::BottomUp);
        assert_eq!(Strategy::from(StrategyArg::TopDown), Strategy::TopDown);
    }
}
