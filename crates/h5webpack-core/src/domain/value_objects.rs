//! Domain value objects: StylesheetEngine, ScriptEngine.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO registry data. Extensions, template directories, and
//! dependency lists live in `engines.rs`. This file's only job is to define
//! the types, their string representations, and their parsers.
//!
//! # Two parsers
//!
//! - `FromStr` is strict and rejects unknown names. The configuration-file
//!   loader uses it.
//! - `from_flag` takes only the exact command-line names; anything else,
//!   including a different case or an alias, falls back to the default
//!   variant.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── StylesheetEngine ──────────────────────────────────────────────────────────

/// Stylesheet preprocessor used by the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetEngine {
    /// Plain CSS, no preprocessor.
    #[default]
    Plain,
    Less,
    Sass,
}

impl StylesheetEngine {
    pub const ALL: [StylesheetEngine; 3] = [Self::Plain, Self::Less, Self::Sass];

    /// The name accepted on the command line (`--css <engine>`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "css",
            Self::Less => "less",
            Self::Sass => "sass",
        }
    }

    /// Lenient parse of a `--css` value. Only `less`, `sass` and `css` are
    /// recognised; everything else yields [`Self::Plain`].
    pub fn from_flag(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == value)
            .unwrap_or_default()
    }
}

impl fmt::Display for StylesheetEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StylesheetEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" | "plain" => Ok(Self::Plain),
            "less" => Ok(Self::Less),
            "sass" | "scss" => Ok(Self::Sass),
            other => Err(DomainError::UnknownEngine {
                kind: "stylesheet",
                name: other.to_string(),
            }),
        }
    }
}

// ── ScriptEngine ──────────────────────────────────────────────────────────────

/// JavaScript dialect (and matching webpack loader) of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptEngine {
    #[default]
    Es2015,
    TypeScript,
    CoffeeScript,
}

impl ScriptEngine {
    pub const ALL: [ScriptEngine; 3] = [Self::Es2015, Self::TypeScript, Self::CoffeeScript];

    /// The name accepted on the command line (`--js <engine>`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Es2015 => "es2015",
            Self::TypeScript => "typescript",
            Self::CoffeeScript => "coffeescript",
        }
    }

    /// Lenient parse of a `--js` value. Only `es2015`, `typescript` and
    /// `coffeescript` are recognised; everything else yields [`Self::Es2015`].
    pub fn from_flag(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == value)
            .unwrap_or_default()
    }
}

impl fmt::Display for ScriptEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es2015" | "es6" | "js" => Ok(Self::Es2015),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "coffeescript" | "coffee" => Ok(Self::CoffeeScript),
            other => Err(DomainError::UnknownEngine {
                kind: "script",
                name: other.to_string(),
            }),
        }
    }
}
