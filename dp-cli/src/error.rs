//! Error types for the CLI

use dp_solver::{ConstructionError, SolverError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input file or value
    #[error("Input error: {0}")]
    Input(String),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConstructionError> for CliError {
    fn from(err: ConstructionError) -> Self {
        CliError::Solver(err.into())
    }
}
