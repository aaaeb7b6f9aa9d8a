//! Tracing subscriber initialisation.
//!
//! Only the binary calls [`init_logging`]; the library crates only *emit*
//! spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)                | Filter level |
//! |------------------------|--------------|
//! | (none)                 | WARN         |
//! | `--verbose`            | INFO         |
//! | `--verbose --verbose`  | DEBUG        |
//! | three or more          | TRACE        |
//! | `--quiet`              | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that share the flag-derived level.
const TARGETS: [&str; 3] = ["h5_webpack", "h5webpack_core", "h5webpack_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. Events go to
/// stderr so stdout only carries the `create :` lines and the summary.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(args.verbose >= 2)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `h5_webpack=<level>,h5webpack_core=<level>,...`; other crates stay silent.
fn directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_count_maps_to_levels() {
        let levels: Vec<_> = (0..=4)
            .map(|verbose| {
                derive_level(&GlobalArgs {
                    verbose,
                    ..GlobalArgs::default()
                })
            })
            .collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        assert_eq!(
            directives("debug"),
            "h5_webpack=debug,h5webpack_core=debug,h5webpack_adapters=debug"
        );
    }

    #[test]
    fn quiet_wins() {
        let args = GlobalArgs {
            verbose: 2,
            quiet: true,
            ..GlobalArgs::default()
        };
        assert_eq!(derive_level(&args), "error");
    }
}
