//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use ratings_cli::CliError;

fn main() {
    if let Err(err) = ratings_cli::init_logging() {
        eprintln!("food-ratings: {err}");
    }
    match ratings_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("food-ratings: {err}");
            std::process::exit(1);
        }
    }
}
