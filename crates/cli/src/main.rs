//! Knit Basket CLI

use std::{io, process::ExitCode};

use tracing::error;

use crate::{commands::CliError, config::Config};

mod commands;
mod config;
mod observability;

/// Knit Basket CLI entry point
fn main() -> ExitCode {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        return ExitCode::FAILURE;
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");

            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<(), CliError> {
    let catalog = config.catalog.open()?;
    let stdout = io::stdout();

    config.command.run(&catalog, stdout.lock())
}
