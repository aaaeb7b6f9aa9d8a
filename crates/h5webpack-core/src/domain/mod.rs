//! Core domain layer for h5-webpack.
//!
//! This module contains pure scaffolding logic with no I/O. Template
//! rendering, filesystem access, and progress reporting are reached through
//! ports (traits) defined in the application layer.
//!
//! - **No I/O**: No filesystem, terminal, or template engine calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Immutable values**: `Configuration` and `Manifest` are derived once
//!   and never mutated

// Public API - what the world sees
pub mod engines;
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    binding::{TemplateBinding, TemplateValue},
    configuration::{Configuration, ConfigurationBuilder},
    creation_log::CreationLog,
    manifest::{Manifest, Scripts},
    plan::{branches_for, plan, templates},
    project_structure::{
        Branch, BranchPlan, DirectoryToCreate, FileContent, FileSource, FileToWrite, FsEntry,
        ProjectStructure,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use naming::{FALLBACK_APP_NAME, app_name_or_fallback, create_app_name};

pub use value_objects::{ScriptEngine, StylesheetEngine};
