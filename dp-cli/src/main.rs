//! dpsolve - Command-line interface for the optimal-substructure solvers

mod cli;
mod config;
mod error;
mod output;
mod runner;

use clap::Parser;
use cli::Args;
use config::Config;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    if config.verbose {
        init_logging();
    }

    runner::run(&config)
}

/// Send solver spans to stderr so they never mix with answers
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
