//! Template bindings: which template to render, and with what.
//!
//! A [`TemplateBinding`] pairs a logical template name with the variables
//! derived from a [`Configuration`]. Bindings are created per use and
//! dropped after rendering. Variable names are the contract between this
//! module and the template corpus shipped by the adapter crate.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::entities::configuration::Configuration;

/// A primitive template variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Str(String),
    Bool(bool),
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A `(template name, variables)` pair ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBinding {
    name: String,
    variables: BTreeMap<String, TemplateValue>,
}

impl TemplateBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: BTreeMap::new(),
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Binding for a generated script entry (`js/app.js`, `js/info.js`).
    ///
    /// | Variable | Meaning                                          |
    /// |----------|--------------------------------------------------|
    /// | `css`    | extension of the stylesheet the entry imports    |
    /// | `cache`  | whether the entry pulls in `libs/utils`          |
    pub fn script_entry(name: impl Into<String>, cfg: &Configuration) -> Self {
        Self::new(name)
            .with_variable("css", cfg.style_def().extension)
            .with_variable("cache", cfg.cache_support())
    }

    /// Binding for a webpack build configuration (`webpack/dev.js`,
    /// `webpack/pro.js`). Both files receive the same mapping.
    ///
    /// | Variable      | Meaning                                  |
    /// |---------------|------------------------------------------|
    /// | `multiple`    | second `info` entry point                |
    /// | `js_loader`   | script engine name                       |
    /// | `css_loader`  | stylesheet engine name                   |
    /// | `file_loader` | icon-font loader rule                    |
    /// | `cache`       | long-term caching of the vendor chunk    |
    /// | `extname`     | script extension without the dot         |
    pub fn build_config(name: impl Into<String>, cfg: &Configuration) -> Self {
        Self::new(name)
            .with_variable("multiple", cfg.multiple_entry())
            .with_variable("js_loader", cfg.script().as_str())
            .with_variable("css_loader", cfg.stylesheet().as_str())
            .with_variable("file_loader", cfg.icon_font())
            .with_variable("cache", cfg.cache_support())
            .with_variable("extname", cfg.script_def().extension)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.variables.get(key)
    }

    pub fn variables(&self) -> &BTreeMap<String, TemplateValue> {
        &self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ScriptEngine, StylesheetEngine};

    #[test]
    fn script_entry_uses_style_extension() {
        let cfg = Configuration::builder()
            .stylesheet(StylesheetEngine::Sass)
            .build();
        let binding = TemplateBinding::script_entry("js/app.js", &cfg);

        assert_eq!(binding.name(), "js/app.js");
        assert_eq!(binding.get("css"), Some(&TemplateValue::from("scss")));
        assert_eq!(binding.get("cache"), Some(&TemplateValue::Bool(false)));
    }

    #[test]
    fn dev_and_pro_share_variables() {
        let cfg = Configuration::builder()
            .script(ScriptEngine::TypeScript)
            .icon_font(true)
            .build();
        let dev = TemplateBinding::build_config("webpack/dev.js", &cfg);
        let pro = TemplateBinding::build_config("webpack/pro.js", &cfg);

        assert_eq!(dev.variables(), pro.variables());
        assert_eq!(dev.get("extname"), Some(&TemplateValue::from("ts")));
        assert_eq!(dev.get("js_loader"), Some(&TemplateValue::from("typescript")));
        assert_eq!(dev.get("file_loader"), Some(&TemplateValue::Bool(true)));
    }

    #[test]
    fn values_serialize_as_plain_json() {
        let binding = TemplateBinding::new("t")
            .with_variable("flag", true)
            .with_variable("name", "x");
        let json = serde_json::to_string(binding.variables()).unwrap();
        assert_eq!(json, r#"{"flag":true,"name":"x"}"#);
    }
}
