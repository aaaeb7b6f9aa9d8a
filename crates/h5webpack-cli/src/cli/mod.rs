//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and how clap failures are reported. No business logic lives here.

use std::path::PathBuf;

use clap::{
    Parser,
    error::{ContextKind, ContextValue, ErrorKind},
};
use h5webpack_core::domain::{Configuration, ScriptEngine, StylesheetEngine};

pub mod global;
pub use global::GlobalArgs;

use crate::config::Defaults;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "h5-webpack",
    bin_name = "h5-webpack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a webpack-based H5 project",
    after_help = "EXAMPLES:\n\
        \x20 h5-webpack                      # scaffold into the current directory\n\
        \x20 h5-webpack my-page -c less -m   # less stylesheets, two entry points\n\
        \x20 h5-webpack shop -j typescript --cache -f",
    disable_version_flag = true,
)]
pub struct Cli {
    /// Print version information.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Stylesheet engine.
    #[arg(
        short = 'c',
        long = "css",
        value_name = "engine",
        help = "add stylesheet <engine> support (less|sass|css) (defaults to plain css)"
    )]
    pub css: Option<String>,

    /// Script engine.
    #[arg(
        short = 'j',
        long = "js",
        value_name = "engine",
        help = "add js loader <engine> support (es2015|typescript|coffeescript) (default es2015)"
    )]
    pub js: Option<String>,

    /// Icon-font loader and `src/font/`.
    #[arg(short = 'f', long = "font", help = "add iconfont loader")]
    pub font: bool,

    /// Long-term caching with a shared vendor chunk.
    #[arg(long = "cache", help = "add webpack cache")]
    pub cache: bool,

    /// Second `info` entry point.
    #[arg(short = 'm', long = "multiple", help = "create multiple entry")]
    pub multiple: bool,

    /// Destination directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub destination: PathBuf,

    /// Positionals after the destination are accepted and ignored.
    #[arg(value_name = "IGNORED", hide = true, num_args = 0..)]
    pub ignored: Vec<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// Merge flags over configured defaults.
    ///
    /// Flag values for `--css`/`--js` outside the known set fall back to the
    /// default engine. Boolean flags can only switch a feature on.
    pub fn configuration(&self, defaults: &Defaults) -> Configuration {
        let stylesheet = self
            .css
            .as_deref()
            .map(StylesheetEngine::from_flag)
            .unwrap_or(defaults.css);
        let script = self
            .js
            .as_deref()
            .map(ScriptEngine::from_flag)
            .unwrap_or(defaults.js);

        Configuration::builder()
            .stylesheet(stylesheet)
            .script(script)
            .icon_font(self.font || defaults.font)
            .cache_support(self.cache || defaults.cache)
            .multiple_entry(self.multiple || defaults.multiple)
            .build()
    }
}

/// What to do with a clap parse failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseFailure {
    /// `--help` / `--version`: print clap's text to stdout, exit 0.
    Display(String),
    /// Anything else: one line on stderr, exit 1.
    Usage(String),
}

/// Translate a clap error into the tool's own usage messages.
pub fn classify(err: &clap::Error) -> ParseFailure {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            ParseFailure::Display(err.render().to_string())
        }
        ErrorKind::UnknownArgument => {
            let flag = context_string(err, ContextKind::InvalidArg).unwrap_or_default();
            ParseFailure::Usage(format!("error: unknown option '{flag}'"))
        }
        ErrorKind::InvalidValue | ErrorKind::NoEquals
            if context_string(err, ContextKind::InvalidValue).is_none_or(|v| v.is_empty()) =>
        {
            let arg = context_string(err, ContextKind::InvalidArg).unwrap_or_default();
            ParseFailure::Usage(format!("error: option '{arg}' argument missing"))
        }
        _ => {
            let rendered = err.render().to_string();
            let first = rendered.lines().next().unwrap_or("error: invalid arguments");
            ParseFailure::Usage(first.trim_end().to_string())
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind)? {
        ContextValue::String(s) => Some(s.clone()),
        ContextValue::Strings(v) => v.first().cloned(),
        _ => None,
    }
}
