//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged in [`crate::cli::Cli::configuration`])
//! 2. Environment variables, `H5WEBPACK_` prefix, `__` between sections
//!    (`H5WEBPACK_DEFAULTS__CSS=less`)
//! 3. Config file: `--config <FILE>` or `<config dir>/h5-webpack/config.toml`
//! 4. Built-in defaults (always present)
//!
//! Engine names in a file or the environment are parsed strictly; a typo is
//! a configuration error rather than a silent fallback.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use h5webpack_core::domain::{ScriptEngine, StylesheetEngine};

const ENV_PREFIX: &str = "H5WEBPACK";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when the matching flag is absent.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(deserialize_with = "strict_engine")]
    pub css: StylesheetEngine,
    #[serde(deserialize_with = "strict_engine")]
    pub js: ScriptEngine,
    pub font: bool,
    pub cache: bool,
    pub multiple: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

fn strict_engine<'de, D, E>(deserializer: D) -> Result<E, D::Error>
where
    D: Deserializer<'de>,
    E: FromStr,
    E::Err: fmt::Display,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and the environment.
    ///
    /// A file passed with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                builder = builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(path) = Self::config_path() {
                    builder = builder.add_source(
                        File::from(path)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "h5-webpack", "h5-webpack")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_plain() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.css, StylesheetEngine::Plain);
        assert_eq!(cfg.defaults.js, ScriptEngine::Es2015);
        assert!(!cfg.defaults.cache);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config(
            "[defaults]\ncss = \"less\"\njs = \"ts\"\nmultiple = true\n\n[output]\nno_color = true\n",
        );
        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.defaults.css, StylesheetEngine::Less);
        assert_eq!(cfg.defaults.js, ScriptEngine::TypeScript);
        assert!(cfg.defaults.multiple);
        assert!(!cfg.defaults.font);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn unknown_engine_in_file_is_an_error() {
        let file = write_config("[defaults]\ncss = \"stylus\"\n");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("stylus"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }

    #[test]
    fn config_path_ends_with_file_name() {
        if let Some(p) = AppConfig::config_path() {
            assert!(p.ends_with("config.toml"));
        }
    }
}
