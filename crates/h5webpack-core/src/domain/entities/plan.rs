//! Scaffold planning: Configuration in, [`ProjectStructure`] out.
//!
//! The plan is a fixed decision tree over the configuration. Nothing here
//! touches the filesystem or a template engine; files are described by
//! [`FileSource`] and resolved later by the application layer.

use std::path::PathBuf;

use crate::domain::{
    entities::{
        binding::TemplateBinding,
        configuration::Configuration,
        manifest::Manifest,
        project_structure::{Branch, BranchPlan, FileSource, ProjectStructure},
    },
    error::DomainError,
};

/// Logical names in the template corpus.
pub mod templates {
    pub const SCRIPT_APP: &str = "js/app.js";
    pub const SCRIPT_INFO: &str = "js/info.js";
    pub const CACHE_UTILS: &str = "js/libs/utils.js";
    pub const IMAGE: &str = "images/app.jpg";
    pub const HTML_INDEX: &str = "html/index.html";
    pub const HTML_INFO: &str = "html/info.html";
    pub const GITIGNORE: &str = "gitignore";
    pub const WEBPACK_DEV: &str = "webpack/dev.js";
    pub const WEBPACK_PRO: &str = "webpack/pro.js";
}

/// Branches a run executes, known before anything is written.
///
/// Six normally, seven when cache support adds `src/js/libs/`.
pub fn branches_for(cfg: &Configuration) -> Vec<Branch> {
    let mut branches = vec![Branch::Scripts];
    if cfg.cache_support() {
        branches.push(Branch::CacheLibs);
    }
    branches.extend([
        Branch::Styles,
        Branch::Images,
        Branch::Markup,
        Branch::Manifest,
        Branch::BuildConfig,
    ]);
    branches
}

/// Build and validate the structure for `app_name` rooted at `root`.
pub fn plan(
    app_name: &str,
    root: impl Into<PathBuf>,
    cfg: &Configuration,
) -> Result<ProjectStructure, DomainError> {
    let mut structure = ProjectStructure::new(root).with_skeleton_directory("src");

    for branch in branches_for(cfg) {
        structure.add_branch(plan_branch(branch, app_name, cfg)?);
    }

    structure.validate()?;
    Ok(structure)
}

fn plan_branch(branch: Branch, app_name: &str, cfg: &Configuration) -> Result<BranchPlan, DomainError> {
    let js = cfg.script_def().extension;
    let style = cfg.style_def();
    let plan = BranchPlan::new(branch);

    let plan = match branch {
        Branch::Scripts => {
            let mut plan = plan.directory("src/js");
            if cfg.multiple_entry() {
                plan = plan.file(
                    format!("src/js/info.{js}"),
                    FileSource::Render(TemplateBinding::script_entry(templates::SCRIPT_INFO, cfg)),
                );
            }
            plan.file(
                format!("src/js/app.{js}"),
                FileSource::Render(TemplateBinding::script_entry(templates::SCRIPT_APP, cfg)),
            )
        }

        Branch::CacheLibs => plan
            .directory("src/js/libs")
            .file(format!("src/js/libs/utils.{js}"), FileSource::copy_text(templates::CACHE_UTILS)),

        Branch::Styles => {
            let ext = style.extension;
            let dir = style.template_dir;
            let mut plan = plan
                .directory("src/css")
                .file(format!("src/css/app.{ext}"), FileSource::copy_text(format!("{dir}/app.{ext}")));
            if cfg.multiple_entry() {
                plan = plan.file(
                    format!("src/css/info.{ext}"),
                    FileSource::copy_text(format!("{dir}/info.{ext}")),
                );
            }
            plan
        }

        Branch::Images => plan
            .directory("src/images")
            .file("src/images/app.jpg", FileSource::copy_binary(templates::IMAGE)),

        Branch::Markup => {
            let mut plan = plan;
            if cfg.icon_font() {
                plan = plan.directory("src/font");
            }
            plan = plan.file("src/index.html", FileSource::copy_text(templates::HTML_INDEX));
            if cfg.multiple_entry() {
                plan = plan.file("src/info.html", FileSource::copy_text(templates::HTML_INFO));
            }
            plan
        }

        Branch::Manifest => {
            let json = Manifest::build(app_name, cfg)
                .to_json()
                .map_err(|e| DomainError::Serialization(e.to_string()))?;
            plan.file("package.json", FileSource::Generated(json))
                .file(".gitignore", FileSource::copy_text(templates::GITIGNORE))
        }

        Branch::BuildConfig => plan
            .directory("webpack")
            .file(
                "webpack/dev.js",
                FileSource::Render(TemplateBinding::build_config(templates::WEBPACK_DEV, cfg)),
            )
            .file(
                "webpack/pro.js",
                FileSource::Render(TemplateBinding::build_config(templates::WEBPACK_PRO, cfg)),
            ),
    };

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::Path;

    use super::*;
    use crate::domain::value_objects::{ScriptEngine, StylesheetEngine};

    fn file_set(structure: &ProjectStructure) -> BTreeSet<String> {
        structure
            .files()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn six_branches_without_cache() {
        let cfg = Configuration::builder().multiple_entry(true).icon_font(true).build();
        assert_eq!(branches_for(&cfg).len(), 6);
    }

    #[test]
    fn seven_branches_with_cache() {
        let cfg = Configuration::builder().cache_support(true).build();
        let branches = branches_for(&cfg);
        assert_eq!(branches.len(), 7);
        assert!(branches.contains(&Branch::CacheLibs));
    }

    #[test]
    fn default_plan_files() {
        let structure = plan("demo", "/out", &Configuration::default()).unwrap();
        let expected: BTreeSet<String> = [
            "package.json",
            ".gitignore",
            "webpack/dev.js",
            "webpack/pro.js",
            "src/index.html",
            "src/js/app.js",
            "src/css/app.css",
            "src/images/app.jpg",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        assert_eq!(file_set(&structure), expected);
        assert!(!structure.directories().any(|d| d.path == Path::new("src/font")));
    }

    #[test]
    fn every_option_adds_its_paths() {
        let cfg = Configuration::builder()
            .stylesheet(StylesheetEngine::Less)
            .script(ScriptEngine::TypeScript)
            .icon_font(true)
            .cache_support(true)
            .multiple_entry(true)
            .build();
        let structure = plan("demo", "/out", &cfg).unwrap();
        let files = file_set(&structure);

        for path in [
            "src/info.html",
            "src/js/info.ts",
            "src/js/app.ts",
            "src/css/info.less",
            "src/css/app.less",
            "src/js/libs/utils.ts",
        ] {
            assert!(files.contains(path), "missing {path}");
        }
        assert_eq!(files.len(), 12);
        assert!(structure.directories().any(|d| d.path == Path::new("src/font")));
    }

    #[test]
    fn sass_copies_from_sass_directory() {
        let cfg = Configuration::builder().stylesheet(StylesheetEngine::Sass).build();
        let structure = plan("demo", "/out", &cfg).unwrap();
        let css = structure
            .files()
            .find(|f| f.path == Path::new("src/css/app.scss"))
            .unwrap();
        assert_eq!(css.source, FileSource::copy_text("sass/app.scss"));
    }

    #[test]
    fn image_is_copied_as_binary() {
        let structure = plan("demo", "/out", &Configuration::default()).unwrap();
        let image = structure
            .files()
            .find(|f| f.path == Path::new("src/images/app.jpg"))
            .unwrap();
        assert_eq!(image.source, FileSource::copy_binary("images/app.jpg"));
    }

    #[test]
    fn manifest_is_generated_with_app_name() {
        let structure = plan("my-app", "/out", &Configuration::default()).unwrap();
        let manifest = structure
            .files()
            .find(|f| f.path == Path::new("package.json"))
            .unwrap();
        match &manifest.source {
            FileSource::Generated(json) => assert!(json.contains("\"name\": \"my-app\"")),
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn every_combination_has_exact_layout() {
        for css in StylesheetEngine::ALL {
            for js in ScriptEngine::ALL {
                for flags in 0..8u8 {
                    let cfg = Configuration::builder()
                        .stylesheet(css)
                        .script(js)
                        .icon_font(flags & 1 != 0)
                        .cache_support(flags & 2 != 0)
                        .multiple_entry(flags & 4 != 0)
                        .build();
                    let structure = plan("demo", "/out", &cfg).unwrap();
                    assert_eq!(structure.branches().len(), branches_for(&cfg).len());

                    let (expected_dirs, expected_files) = expected_layout(&cfg);
                    assert_eq!(dir_set(&structure), expected_dirs, "directories for {cfg}");
                    assert_eq!(file_set(&structure), expected_files, "files for {cfg}");
                }
            }
        }
    }

    fn dir_set(structure: &ProjectStructure) -> BTreeSet<String> {
        structure
            .directories()
            .map(|d| d.path.to_string_lossy().into_owned())
            .collect()
    }

    /// Layout written out by hand, independent of the engine registry.
    fn expected_layout(cfg: &Configuration) -> (BTreeSet<String>, BTreeSet<String>) {
        let css = match cfg.stylesheet() {
            StylesheetEngine::Plain => "css",
            StylesheetEngine::Less => "less",
            StylesheetEngine::Sass => "scss",
        };
        let js = match cfg.script() {
            ScriptEngine::Es2015 => "js",
            ScriptEngine::TypeScript => "ts",
            ScriptEngine::CoffeeScript => "coffee",
        };

        let mut dirs: BTreeSet<String> = ["src", "src/js", "src/css", "src/images", "webpack"]
            .map(String::from)
            .into();
        let mut files: BTreeSet<String> = [
            format!("src/js/app.{js}"),
            format!("src/css/app.{css}"),
            "src/images/app.jpg".into(),
            "src/index.html".into(),
            "package.json".into(),
            ".gitignore".into(),
            "webpack/dev.js".into(),
            "webpack/pro.js".into(),
        ]
        .into();

        if cfg.multiple_entry() {
            files.insert(format!("src/js/info.{js}"));
            files.insert(format!("src/css/info.{css}"));
            files.insert("src/info.html".into());
        }
        if cfg.cache_support() {
            dirs.insert("src/js/libs".into());
            files.insert(format!("src/js/libs/utils.{js}"));
        }
        if cfg.icon_font() {
            dirs.insert("src/font".into());
        }
        (dirs, files)
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let structure = ProjectStructure::new("/out")
            .with_skeleton_directory("src")
            .with_branch(BranchPlan::new(Branch::Images).directory("src"));
        assert!(matches!(structure.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn absolute_paths_are_rejected() {
        let structure = ProjectStructure::new("/out")
            .with_branch(BranchPlan::new(Branch::Images).directory("/etc"));
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn empty_structure_is_rejected() {
        assert_eq!(ProjectStructure::new("/out").validate(), Err(DomainError::EmptyPlan));
    }
}
