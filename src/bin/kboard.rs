//! `kboard` command-line entry point.
//!
//! Parses the command line, resolves the data file and prints whatever the
//! command renders. Failures are reported on stderr with exit code 1 for
//! invalid commands and 2 for storage or configuration problems.

use clap::Parser;
use kboard::cli::{Cli, CliError, Confirm, run};
use kboard::config::{Config, DEFAULT_LOG_FILTER, LOG_FILTER_ENV};
use kboard::render;
use mockable::DefaultClock;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Reads yes/no answers from stdin.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{question} [y/N] ")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: Cli) -> Result<String, CliError> {
    let config = Config::from_env()?;
    run(cli.command, &config, &mut StdinConfirm, &DefaultClock)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => {
            if writeln!(io::stdout().lock(), "{output}").is_err() {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            let code = err.exit_code();
            if writeln!(io::stderr().lock(), "{}", render::error(&err.user_message())).is_err() {
                return ExitCode::from(2);
            }
            code
        }
    }
}
