//! The generated `package.json`.
//!
//! [`Manifest::build`] is a pure function of the package name and the
//! [`Configuration`]. Serialisation is stable: top-level keys in declaration
//! order, dependency maps sorted by package name, two-space indentation and a
//! trailing newline, the way `npm` itself writes the file.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    engines::{BASE_DEV_DEPENDENCIES, DEV_SCRIPT, PRO_SCRIPT},
    entities::configuration::Configuration,
};

/// Version stamped on every freshly generated project.
pub const INITIAL_VERSION: &str = "0.0.0";

/// npm scripts. Field order is serialisation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub dev: String,
    pub pro: String,
}

/// Package descriptor for the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub scripts: Scripts,
    pub dev_dependencies: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Compose the manifest for `name` under `cfg`.
    ///
    /// devDependencies = base set + stylesheet engine extras + script engine
    /// extras. `dependencies` is always present and always empty.
    pub fn build(name: impl Into<String>, cfg: &Configuration) -> Self {
        let dev_dependencies = BASE_DEV_DEPENDENCIES
            .iter()
            .chain(cfg.style_def().dev_dependencies)
            .chain(cfg.script_def().dev_dependencies)
            .map(|(pkg, range)| (pkg.to_string(), range.to_string()))
            .collect();

        Self {
            name: name.into(),
            version: INITIAL_VERSION.to_string(),
            scripts: Scripts {
                dev: DEV_SCRIPT.to_string(),
                pro: PRO_SCRIPT.to_string(),
            },
            dev_dependencies,
            dependencies: BTreeMap::new(),
        }
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
