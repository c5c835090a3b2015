//! Command-line interface for replaying food rating sessions.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod run;
pub mod session;

pub use error::CliError;
use run::{RunArgs, run_session};

const ARG_SESSION: &str = "session";
const ARG_SEED_DEMO: &str = "seed-demo";
const ARG_DEFAULT_LIST: &str = "default-list";
const ENV_SESSION: &str = "FOOD_RATINGS_CMDS_RUN_SESSION_PATH";

/// Run the food ratings CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Run(args) => run_session(args),
    }
}

/// Install the stderr log subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Records emitted
/// through the `log` facade are forwarded to the same subscriber.
///
/// # Errors
/// Returns [`CliError::InitLogging`] when a global subscriber or logger is
/// already installed.
pub fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::InitLogging)
}

#[derive(Debug, Parser)]
#[command(
    name = "food-ratings",
    about = "Replay food rating sessions against in-memory ranking lists",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a JSON session file and print the outcomes.
    Run(RunArgs),
}

#[cfg(test)]
mod tests;
