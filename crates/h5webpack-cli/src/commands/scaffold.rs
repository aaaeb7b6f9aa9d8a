//! Scaffold the project into the destination directory.
//!
//! Responsibility: resolve the package name and configuration, guard a
//! non-empty destination, wire the adapters, and run the core service.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, instrument};

use h5webpack_adapters::{EmbeddedTemplates, LocalFilesystem, MiniJinjaRenderer};
use h5webpack_core::{
    application::{ScaffoldReport, ScaffoldService, ports::Filesystem},
    domain::app_name_or_fallback,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute a scaffold run.
///
/// 1. Derive the package name from the absolute destination path
/// 2. Merge flags over configured defaults
/// 3. Ask before writing into a non-empty destination, unless `--yes`
/// 4. Run the scaffold; progress and next steps go through `output`
#[instrument(skip_all, fields(destination = %cli.destination.display()))]
pub fn execute(cli: &Cli, config: &AppConfig, output: &OutputManager) -> CliResult<ScaffoldReport> {
    let destination = cli.destination.as_path();
    let app_name = resolve_app_name(destination)?;
    let configuration = cli.configuration(&config.defaults);

    debug!(
        app_name = %app_name,
        stylesheet = %configuration.stylesheet(),
        script = %configuration.script(),
        font = configuration.icon_font(),
        cache = configuration.cache_support(),
        multiple = configuration.multiple_entry(),
        "Configuration resolved"
    );

    let filesystem = LocalFilesystem::new();
    if !filesystem.is_empty_directory(destination)? {
        debug!("Destination is not empty");
        if !cli.global.yes && !prompt::confirm_overwrite()? {
            return Err(CliError::Cancelled);
        }
    }

    output.print("")?;

    let service = ScaffoldService::new(
        Box::new(EmbeddedTemplates::new()),
        Box::new(MiniJinjaRenderer::new()?),
        Box::new(filesystem),
        Box::new(output.clone()),
    );
    let report = service.scaffold(&app_name, &configuration, destination)?;

    info!(
        app_name = %report.app_name,
        entries = report.entry_count(),
        "Scaffold complete"
    );
    Ok(report)
}

/// Package name for `destination`, resolved against the working directory
/// so that `.` and `..` name the directory they point at.
pub fn resolve_app_name(destination: &Path) -> CliResult<String> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "could not read the current directory".into(),
        source: e,
    })?;
    Ok(app_name_or_fallback(&normalize(&cwd.join(destination))))
}

/// Lexically remove `.` and `..` components without touching the disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
