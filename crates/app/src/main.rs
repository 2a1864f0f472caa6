mod answers;
mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use services::{AppServices, Clock};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Used when `RUST_LOG` is unset; stdout stays reserved for command output.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let clock = Clock::system();
    let services = AppServices::new_builtin(clock, None)?;
    let json = cli.json;

    match cli.command {
        Command::Courses { search, level } => {
            commands::catalog::courses(&services, &search, &level, json)
        }
        Command::Course { id, done } => commands::catalog::course(&services, &id, &done, json),
        Command::Lesson { course, lesson } => {
            commands::catalog::lesson(&services, &course, &lesson, json)
        }
        Command::Blog { search, category } => {
            commands::catalog::blog(&services, &search, &category, json)
        }
        Command::Post { id } => commands::catalog::post(&services, &id, json),
        Command::Quiz(args) => commands::quiz::run(&services, clock, &args, json).await,
        Command::SelfCheck { answers } => {
            commands::self_check::run(&services, answers.as_deref(), json).await
        }
        Command::Certificate { name } => commands::certificate::run(&services, &name, json),
        Command::CheckContent => commands::content::run(&services, json),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(?cli, "starting");

    if let Err(err) = run(cli).await {
        // Binary glue: the one place errors are printed.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
