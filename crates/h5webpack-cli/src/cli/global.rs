//! Ambient flags that sit beside the scaffold options.
//!
//! Declared here and flattened into [`super::Cli`]. `-v` belongs to
//! `--version`, so verbosity only has a long form.

use clap::Args;
use std::path::PathBuf;

/// Logging, colour, configuration, and prompt flags.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO, twice for DEBUG, three times for TRACE.
    #[arg(
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (repeat for more)",
        long_help = "Increase logging verbosity:
    (none)              - Only warnings and errors
    --verbose           - Info level (progress messages)
    --verbose --verbose - Debug level (detailed diagnostics)
    three or more       - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress the next-steps summary and lower logging to errors.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress the next-steps summary"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(long = "config", value_name = "FILE", help = "Configuration file path")]
    pub config: Option<PathBuf>,

    /// Answer yes to the non-empty destination prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Write into a non-empty destination without asking"
    )]
    pub yes: bool,
}
