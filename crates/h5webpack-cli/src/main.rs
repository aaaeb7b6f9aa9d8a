//! # h5-webpack
//!
//! Generates a webpack-based H5 project skeleton.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `-v` print and exit 0).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Run the scaffold.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! |  0   | Success                                        |
//! |  1   | Usage error, declined prompt, write failure    |
//! |  4   | Configuration error                            |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::{
    cli::{Cli, GlobalArgs, ParseFailure, classify},
    config::AppConfig,
    error::CliError,
    logging::init_logging,
    output::{OutputManager, shutdown},
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Load .env before tracing init so RUST_LOG and H5WEBPACK_* from the file apply.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return match classify(&e) {
                ParseFailure::Display(text) => {
                    print!("{text}");
                    shutdown(0)
                }
                ParseFailure::Usage(message) => {
                    handle_error(CliError::Usage { message }, &GlobalArgs::default())
                }
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return shutdown(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );
    if !cli.ignored.is_empty() {
        debug!(ignored = ?cli.ignored, "Ignoring extra arguments");
    }

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, &cli.global);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Run + 6. Error handling ───────────────────────────────────────
    match commands::scaffold::execute(&cli, &config, &output) {
        Ok(report) => {
            debug!(root = %report.root.display(), branches = report.branches, "Done");
            shutdown(0)
        }
        Err(e) => handle_error(e, &cli.global),
    }
}

/// Print a `CliError` to stderr and map it to an exit code.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    let verbose = global.verbose > 0;
    let msg = if !global.no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    shutdown(err.exit_code())
}
