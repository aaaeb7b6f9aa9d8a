//! Integration tests for h5webpack-core.
//!
//! Drives `ScaffoldService` end to end through hand-written port
//! implementations, without the adapters crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use h5webpack_core::{
    application::ApplicationError,
    domain::{Manifest, TemplateValue},
    prelude::*,
};

#[derive(Clone, Default)]
struct RecordingFs {
    dirs: Arc<Mutex<Vec<PathBuf>>>,
    files: Arc<Mutex<BTreeMap<PathBuf, FileContent>>>,
}

impl Filesystem for RecordingFs {
    fn ensure_directory(&self, path: &Path) -> H5Result<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &FileContent) -> H5Result<()> {
        let mut files = self.files.lock().unwrap();
        assert!(
            files.insert(path.to_path_buf(), content.clone()).is_none(),
            "wrote {} twice",
            path.display()
        );
        Ok(())
    }

    fn is_empty_directory(&self, _path: &Path) -> H5Result<bool> {
        Ok(true)
    }
}

struct NamedStore;

impl TemplateStore for NamedStore {
    fn raw(&self, name: &str) -> H5Result<Vec<u8>> {
        Ok(name.as_bytes().to_vec())
    }
}

/// Renders `name|key=value|...` so tests can inspect the binding.
struct BindingEcho;

impl TemplateRenderer for BindingEcho {
    fn render(&self, binding: &TemplateBinding) -> H5Result<String> {
        let vars: Vec<String> = binding
            .variables()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        Ok(format!("{}|{}", binding.name(), vars.join("|")))
    }
}

#[derive(Clone, Default)]
struct CountingProgress {
    created: Arc<Mutex<Vec<PathBuf>>>,
    finished: Arc<Mutex<usize>>,
}

impl ProgressReporter for CountingProgress {
    fn created(&self, path: &Path) {
        self.created.lock().unwrap().push(path.to_path_buf());
    }

    fn finished(&self, _destination: &Path) {
        *self.finished.lock().unwrap() += 1;
    }
}

fn service(fs: &RecordingFs, progress: &CountingProgress) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(NamedStore),
        Box::new(BindingEcho),
        Box::new(fs.clone()),
        Box::new(progress.clone()),
    )
}

#[test]
fn test_full_scaffold_workflow() {
    let fs = RecordingFs::default();
    let progress = CountingProgress::default();

    let cfg = Configuration::builder()
        .stylesheet(StylesheetEngine::Less)
        .script(ScriptEngine::TypeScript)
        .icon_font(true)
        .cache_support(true)
        .multiple_entry(true)
        .build();

    let report = service(&fs, &progress)
        .scaffold("my-app", &cfg, Path::new("my-app"))
        .unwrap();

    assert_eq!(report.branches, 7);
    assert_eq!(*progress.finished.lock().unwrap(), 1);

    let files = fs.files.lock().unwrap();
    assert_eq!(files.len(), 12);
    assert!(files.contains_key(Path::new("my-app/src/js/libs/utils.ts")));
    assert!(fs.dirs.lock().unwrap().contains(&PathBuf::from("my-app/src/font")));

    // Every created path was reported, and nothing else.
    assert_eq!(progress.created.lock().unwrap().len(), report.entry_count());
}

#[test]
fn test_manifest_matches_domain_builder() {
    let fs = RecordingFs::default();
    let progress = CountingProgress::default();
    let cfg = Configuration::builder().stylesheet(StylesheetEngine::Sass).build();

    service(&fs, &progress)
        .scaffold("shop", &cfg, Path::new("."))
        .unwrap();

    let files = fs.files.lock().unwrap();
    let written = files.get(Path::new("./package.json")).unwrap();
    let expected = Manifest::build("shop", &cfg).to_json().unwrap();
    assert_eq!(written, &FileContent::Text(expected));
}

#[test]
fn test_build_configs_share_one_binding() {
    let fs = RecordingFs::default();
    let progress = CountingProgress::default();
    let cfg = Configuration::builder()
        .script(ScriptEngine::CoffeeScript)
        .multiple_entry(true)
        .build();

    service(&fs, &progress)
        .scaffold("app", &cfg, Path::new("out"))
        .unwrap();

    let files = fs.files.lock().unwrap();
    let text = |p: &str| match files.get(Path::new(p)).unwrap() {
        FileContent::Text(t) => t.clone(),
        FileContent::Binary(_) => panic!("{p} should be text"),
    };

    let dev = text("out/webpack/dev.js");
    let pro = text("out/webpack/pro.js");
    assert_eq!(
        dev.split_once('|').unwrap().1,
        pro.split_once('|').unwrap().1
    );
    assert!(dev.contains(&format!("extname={}", TemplateValue::from("coffee"))));
    assert!(dev.contains("multiple=true"));
}

#[test]
fn test_template_failure_propagates() {
    struct EmptyStore;
    impl TemplateStore for EmptyStore {
        fn raw(&self, name: &str) -> H5Result<Vec<u8>> {
            Err(ApplicationError::TemplateNotFound { name: name.into() }.into())
        }
    }

    let progress = CountingProgress::default();
    let service = ScaffoldService::new(
        Box::new(EmptyStore),
        Box::new(BindingEcho),
        Box::new(RecordingFs::default()),
        Box::new(progress.clone()),
    );

    let err = service
        .scaffold("app", &Configuration::default(), Path::new("out"))
        .unwrap_err();
    assert!(err.to_string().contains("Template not found"));
    assert_eq!(*progress.finished.lock().unwrap(), 0);
}
