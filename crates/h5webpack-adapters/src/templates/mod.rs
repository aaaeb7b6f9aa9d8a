//! Template corpus compiled into the binary.
//!
//! Files ending in `.j2` are MiniJinja sources, looked up by their logical
//! name without the suffix (`webpack/dev.js` → `webpack/dev.js.j2`). All
//! other files are copied verbatim.

use include_dir::{Dir, DirEntry, include_dir};

use h5webpack_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::H5Result,
};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Suffix marking a template that must be rendered rather than copied.
pub const RENDER_SUFFIX: &str = ".j2";

/// Read-only view over the embedded corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Source text of a renderable template, addressed by logical name.
    pub fn source(&self, name: &str) -> Option<&'static str> {
        TEMPLATES_DIR
            .get_file(format!("{name}{RENDER_SUFFIX}"))
            .and_then(|f| f.contents_utf8())
    }

    /// `(logical name, source)` for every renderable template.
    pub fn renderable(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        collect_renderable(&TEMPLATES_DIR, &mut out);
        out.sort_by_key(|(name, _)| *name);
        out
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn raw(&self, name: &str) -> H5Result<Vec<u8>> {
        TEMPLATES_DIR
            .get_file(name)
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }
}

fn collect_renderable(dir: &'static Dir, out: &mut Vec<(&'static str, &'static str)>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let stem = file
                    .path()
                    .to_str()
                    .and_then(|name| name.strip_suffix(RENDER_SUFFIX));
                if let (Some(stem), Some(source)) = (stem, file.contents_utf8()) {
                    out.push((stem, source));
                }
            }
            DirEntry::Dir(subdir) => collect_renderable(subdir, out),
        }
    }
}
