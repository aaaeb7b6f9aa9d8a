//! Engine registry.
//!
//! Each stylesheet and script engine is described exactly once here. The
//! manifest builder reads the dependency lists and the scaffold plan reads
//! the extensions and template directories from the same records, so the
//! two can never disagree about which loader belongs to which file type.
//!
//! # Adding a New Engine
//!
//! 1. Add a variant to the enum in `value_objects.rs`
//! 2. Add one entry to [`STYLE_REGISTRY`] or [`SCRIPT_REGISTRY`]
//! 3. Ship its templates under the adapter crate's `templates/` directory

use crate::domain::value_objects::{ScriptEngine, StylesheetEngine};

/// A `(package, version range)` pair destined for `devDependencies`.
pub type DevDependency = (&'static str, &'static str);

// ── Stylesheet engines ───────────────────────────────────────────────────────

/// Everything the scaffold needs to know about a stylesheet engine.
#[derive(Debug, Clone, Copy)]
pub struct StyleDef {
    pub engine: StylesheetEngine,

    /// Extension of generated stylesheet files, without the dot.
    pub extension: &'static str,

    /// Directory under the template corpus holding `app.*` / `info.*`.
    pub template_dir: &'static str,

    /// Compiler and loader added on top of the base set.
    pub dev_dependencies: &'static [DevDependency],
}

pub static STYLE_REGISTRY: &[StyleDef] = &[
    StyleDef {
        engine: StylesheetEngine::Plain,
        extension: "css",
        template_dir: "css",
        dev_dependencies: &[],
    },
    StyleDef {
        engine: StylesheetEngine::Less,
        extension: "less",
        template_dir: "less",
        dev_dependencies: &[("less", "~2.4.0"), ("less-loader", "~4.0.5")],
    },
    StyleDef {
        engine: StylesheetEngine::Sass,
        extension: "scss",
        template_dir: "sass",
        dev_dependencies: &[("node-sass", "~4.5.3"), ("sass-loader", "~6.0.6")],
    },
];

// ── Script engines ───────────────────────────────────────────────────────────

/// Everything the scaffold needs to know about a script engine.
#[derive(Debug, Clone, Copy)]
pub struct ScriptDef {
    pub engine: ScriptEngine,

    /// Extension of generated script files, without the dot.
    pub extension: &'static str,

    pub dev_dependencies: &'static [DevDependency],
}

pub static SCRIPT_REGISTRY: &[ScriptDef] = &[
    ScriptDef {
        engine: ScriptEngine::Es2015,
        extension: "js",
        dev_dependencies: &[],
    },
    ScriptDef {
        engine: ScriptEngine::TypeScript,
        extension: "ts",
        dev_dependencies: &[("ts-loader", "~2.3.2"), ("typescript", "~2.1.5")],
    },
    ScriptDef {
        engine: ScriptEngine::CoffeeScript,
        extension: "coffee",
        dev_dependencies: &[("coffee-loader", "~0.7.3"), ("coffee-script", "~1.12.7")],
    },
];

// ── Shared build tooling ─────────────────────────────────────────────────────

/// devDependencies every generated project gets, whatever its engines.
pub static BASE_DEV_DEPENDENCIES: &[DevDependency] = &[
    ("babel-core", "~6.25.0"),
    ("babel-loader", "~7.1.1"),
    ("babel-preset-es2015", "~6.24.1"),
    ("clean-webpack-plugin", "~0.1.16"),
    ("css-loader", "~0.28.4"),
    ("extract-text-webpack-plugin", "~3.0.0"),
    ("file-loader", "~0.11.2"),
    ("html-webpack-plugin", "~2.30.1"),
    ("html-withimg-loader", "~0.1.16"),
    ("inline-manifest-webpack-plugin", "~3.0.1"),
    ("style-loader", "~0.18.2"),
    ("url-loader", "~0.5.9"),
    ("webpack", "~3.4.1"),
    ("webpack-dev-server", "~2.6.1"),
];

pub const DEV_SCRIPT: &str = "./node_modules/.bin/webpack-dev-server --config ./webpack/dev.js --open";
pub const PRO_SCRIPT: &str = "./node_modules/.bin/webpack --config ./webpack/pro.js";

// ── Lookups ──────────────────────────────────────────────────────────────────

/// Registry entry for a stylesheet engine.
pub fn style_def(engine: StylesheetEngine) -> &'static StyleDef {
    STYLE_REGISTRY
        .iter()
        .find(|def| def.engine == engine)
        .unwrap_or(&STYLE_REGISTRY[0])
}

/// Registry entry for a script engine.
pub fn script_def(engine: ScriptEngine) -> &'static ScriptDef {
    SCRIPT_REGISTRY
        .iter()
        .find(|def| def.engine == engine)
        .unwrap_or(&SCRIPT_REGISTRY[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stylesheet_engine_is_registered_once() {
        for engine in StylesheetEngine::ALL {
            let count = STYLE_REGISTRY.iter().filter(|d| d.engine == engine).count();
            assert_eq!(count, 1, "{engine} registered {count} times");
        }
    }

    #[test]
    fn every_script_engine_is_registered_once() {
        for engine in ScriptEngine::ALL {
            let count = SCRIPT_REGISTRY.iter().filter(|d| d.engine == engine).count();
            assert_eq!(count, 1, "{engine} registered {count} times");
        }
    }

    #[test]
    fn extensions_match_generated_layout() {
        assert_eq!(style_def(StylesheetEngine::Plain).extension, "css");
        assert_eq!(style_def(StylesheetEngine::Less).extension, "less");
        assert_eq!(style_def(StylesheetEngine::Sass).extension, "scss");
        assert_eq!(script_def(ScriptEngine::Es2015).extension, "js");
        assert_eq!(script_def(ScriptEngine::TypeScript).extension, "ts");
        assert_eq!(script_def(ScriptEngine::CoffeeScript).extension, "coffee");
    }

    #[test]
    fn engine_dependencies_do_not_shadow_base_set() {
        let extras = STYLE_REGISTRY
            .iter()
            .flat_map(|d| d.dev_dependencies)
            .chain(SCRIPT_REGISTRY.iter().flat_map(|d| d.dev_dependencies));
        for (name, _) in extras {
            assert!(
                !BASE_DEV_DEPENDENCIES.iter().any(|(base, _)| base == name),
                "{name} is both a base and an engine dependency"
            );
        }
    }

    #[test]
    fn base_set_is_sorted() {
        let names: Vec<_> = BASE_DEV_DEPENDENCIES.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
