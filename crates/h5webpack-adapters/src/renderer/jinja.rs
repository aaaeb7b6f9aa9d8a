//! MiniJinja renderer over the embedded corpus.

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use tracing::{debug, instrument};

use h5webpack_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateBinding,
    error::{H5Error, H5Result},
};

use crate::templates::EmbeddedTemplates;

/// Renders [`TemplateBinding`]s with MiniJinja.
///
/// Undefined variables are errors, so a binding that is missing a key the
/// template uses fails loudly instead of rendering an empty string. Block
/// tags do not leave blank lines behind and trailing newlines are kept.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Renderer over the built-in corpus.
    pub fn new() -> H5Result<Self> {
        Self::from_sources(EmbeddedTemplates::new().renderable())
    }

    /// Renderer over an explicit set of `(name, source)` pairs.
    pub fn from_sources(
        sources: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> H5Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        let mut count = 0usize;
        for (name, source) in sources {
            env.add_template(name, source)
                .map_err(|err| rendering_failed(name, &err))?;
            count += 1;
        }
        debug!(templates = count, "Template environment ready");

        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip_all, fields(template = %binding.name()))]
    fn render(&self, binding: &TemplateBinding) -> H5Result<String> {
        let template = self.env.get_template(binding.name()).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                ApplicationError::TemplateNotFound {
                    name: binding.name().to_string(),
                }
                .into()
            } else {
                rendering_failed(binding.name(), &err)
            }
        })?;

        template
            .render(binding.variables())
            .map_err(|err| rendering_failed(binding.name(), &err))
    }
}

fn rendering_failed(name: &str, err: &minijinja::Error) -> H5Error {
    ApplicationError::RenderingFailed {
        template: name.to_string(),
        reason: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use h5webpack_core::domain::{
        Configuration, ScriptEngine, StylesheetEngine, TemplateBinding, templates,
    };

    fn renderer() -> MiniJinjaRenderer {
        MiniJinjaRenderer::new().unwrap()
    }

    #[test]
    fn script_entry_imports_matching_stylesheet() {
        let cfg = Configuration::builder()
            .stylesheet(StylesheetEngine::Sass)
            .build();
        let out = renderer()
            .render(&TemplateBinding::script_entry(templates::SCRIPT_APP, &cfg))
            .unwrap();

        assert!(out.contains("import '../css/app.scss';"));
        assert!(!out.contains("libs/utils"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn cache_pulls_in_utils() {
        let cfg = Configuration::builder().cache_support(true).build();
        let out = renderer()
            .render(&TemplateBinding::script_entry(templates::SCRIPT_INFO, &cfg))
            .unwrap();
        assert!(out.contains("import { ready } from './libs/utils';"));
    }

    #[test]
    fn webpack_config_follows_configuration() {
        let cfg = Configuration::builder()
            .script(ScriptEngine::TypeScript)
            .stylesheet(StylesheetEngine::Less)
            .icon_font(true)
            .multiple_entry(true)
            .build();
        let out = renderer()
            .render(&TemplateBinding::build_config(templates::WEBPACK_DEV, &cfg))
            .unwrap();

        assert!(out.contains("js/app.ts"));
        assert!(out.contains("js/info.ts"));
        assert!(out.contains("ts-loader"));
        assert!(out.contains("less-loader"));
        assert!(out.contains("font/[name].[ext]"));
        assert!(!out.contains("babel-loader"));
        assert!(!out.contains("CommonsChunkPlugin"));
    }

    #[test]
    fn plain_defaults_render_without_optional_rules() {
        let cfg = Configuration::default();
        let out = renderer()
            .render(&TemplateBinding::build_config(templates::WEBPACK_PRO, &cfg))
            .unwrap();

        assert!(out.contains("babel-loader"));
        assert!(out.contains("test: /\\.css$/"));
        assert!(!out.contains("info.js"));
        assert!(!out.contains("file-loader"));
        assert!(!out.contains("{%"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let cfg = Configuration::builder().cache_support(true).build();
        let binding = TemplateBinding::build_config(templates::WEBPACK_PRO, &cfg);
        let r = renderer();
        assert_eq!(r.render(&binding).unwrap(), r.render(&binding).unwrap());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = renderer().render(&TemplateBinding::new("nope.js")).unwrap_err();
        assert!(matches!(
            err,
            H5Error::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let r = MiniJinjaRenderer::from_sources([("t", "{{ missing }}")]).unwrap();
        let err = r.render(&TemplateBinding::new("t")).unwrap_err();
        assert!(matches!(
            err,
            H5Error::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn syntax_errors_surface_at_construction() {
        assert!(MiniJinjaRenderer::from_sources([("bad", "{% if %}")]).is_err());
    }
}
