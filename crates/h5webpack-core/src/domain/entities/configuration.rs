//! The `Configuration` record and its builder.
//!
//! A `Configuration` is the complete, immutable answer to "what should the
//! generated project look like". It is built once from command-line flags
//! (merged with configuration-file defaults) and then only read.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::{
    engines::{self, ScriptDef, StyleDef},
    value_objects::{ScriptEngine, StylesheetEngine},
};

/// Scaffold options for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Configuration {
    stylesheet: StylesheetEngine,
    script: ScriptEngine,
    icon_font: bool,
    cache_support: bool,
    multiple_entry: bool,
}

impl Configuration {
    /// Start building a new `Configuration`. Every field has a default.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub const fn stylesheet(&self) -> StylesheetEngine {
        self.stylesheet
    }
    pub const fn script(&self) -> ScriptEngine {
        self.script
    }
    pub const fn icon_font(&self) -> bool {
        self.icon_font
    }
    pub const fn cache_support(&self) -> bool {
        self.cache_support
    }
    pub const fn multiple_entry(&self) -> bool {
        self.multiple_entry
    }

    /// Registry entry for the configured stylesheet engine.
    pub fn style_def(&self) -> &'static StyleDef {
        engines::style_def(self.stylesheet)
    }

    /// Registry entry for the configured script engine.
    pub fn script_def(&self) -> &'static ScriptDef {
        engines::script_def(self.script)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.stylesheet, self.script)?;
        if self.icon_font {
            f.write_str(" +font")?;
        }
        if self.cache_support {
            f.write_str(" +cache")?;
        }
        if self.multiple_entry {
            f.write_str(" +multiple")?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`Configuration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationBuilder {
    inner: Configuration,
}

impl ConfigurationBuilder {
    pub fn stylesheet(mut self, engine: StylesheetEngine) -> Self {
        self.inner.stylesheet = engine;
        self
    }

    pub fn script(mut self, engine: ScriptEngine) -> Self {
        self.inner.script = engine;
        self
    }

    pub fn icon_font(mut self, enabled: bool) -> Self {
        self.inner.icon_font = enabled;
        self
    }

    pub fn cache_support(mut self, enabled: bool) -> Self {
        self.inner.cache_support = enabled;
        self
    }

    pub fn multiple_entry(mut self, enabled: bool) -> Self {
        self.inner.multiple_entry = enabled;
        self
    }

    pub fn build(self) -> Configuration {
        self.inner
    }
}
