//! ses-notify: email notification forwarder
//!
//! Entry point for the ses-notify application.

use ses_notify::config::{Cli, Command, ValidatedConfig, write_default_config};
use ses_notify::invocation::InvocationError;
use ses_notify::webhook::{DispatchError, HttpError, IsRetryable};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::RunError;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_application(config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs one invocation with the given configuration.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::retryable_failure();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(_) => exit_code::SUCCESS,
        Err(e) => exit_code_for(&e),
    }
}

/// Logs a failed run and maps it to the exit code the host acts on.
fn exit_code_for(error: &RunError) -> ExitCode {
    match error {
        RunError::Input { .. }
        | RunError::Client(_)
        | RunError::Invocation(InvocationError::Dispatch(DispatchError::Http(
            HttpError::InvalidUrl(_),
        ))) => {
            tracing::error!("{error}");
            exit_code::CONFIG_ERROR
        }
        RunError::Invocation(_) if error.is_retryable() => {
            tracing::error!("{error}; the host should retry");
            exit_code::retryable_failure()
        }
        RunError::Invocation(_) => {
            tracing::error!("Dropping invalid event: {error}");
            exit_code::permanent_failure()
        }
    }
}
