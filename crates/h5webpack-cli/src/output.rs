//! Output management and formatting.
//!
//! Stdout carries the `create : <path>` progress lines and the next-steps
//! summary; everything diagnostic goes through tracing on stderr.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use console::Term;
use owo_colors::OwoColorize;
use tracing::warn;

use h5webpack_core::application::ports::ProgressReporter;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour needs a terminal on stdout and neither `--no-color`,
    /// `NO_COLOR`, nor `output.no_color`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let term = Term::stdout();
        Self {
            quiet: args.quiet,
            color: !(args.no_color || config.output.no_color) && term.is_term(),
            term,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `   create : <path>`. Never suppressed.
    pub fn created(&self, path: &Path) -> io::Result<()> {
        self.term.write_line(&self.create_line(path))
    }

    fn create_line(&self, path: &Path) -> String {
        let word = if self.color {
            "create".cyan().to_string()
        } else {
            "create".to_owned()
        };
        format!("   {word} : {}", path.display())
    }

    /// Install and run instructions printed once the scaffold completes.
    pub fn next_steps(&self, destination: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for line in next_steps_lines(destination, prompt_symbol()) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }
}

impl ProgressReporter for OutputManager {
    fn created(&self, path: &Path) {
        if let Err(e) = OutputManager::created(self, path) {
            warn!(error = %e, path = %path.display(), "Failed to write progress line");
        }
    }

    fn finished(&self, destination: &Path) {
        if let Err(e) = self.next_steps(destination) {
            warn!(error = %e, "Failed to write next steps");
        }
    }
}

/// `>` when launched from Windows `cmd.exe`, `$` everywhere else.
fn prompt_symbol() -> char {
    if cfg!(windows) && std::env::var_os("_").is_none() {
        '>'
    } else {
        '$'
    }
}

fn next_steps_lines(destination: &Path, prompt: char) -> Vec<String> {
    vec![
        String::new(),
        "   install dependencies:".into(),
        format!("     {prompt} cd {} && npm install", destination.display()),
        String::new(),
        "   run the h5:".into(),
        "     npm run dev".into(),
        "   build the h5:".into(),
        "     npm run pro".into(),
        String::new(),
    ]
}

/// Flush both output streams, then hand the exit code back to `main`.
pub fn shutdown(code: u8) -> ExitCode {
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
    ExitCode::from(code)
}

// ── tests ─────────────────────────────────────────────────────────────────────
