pub mod binding;
pub mod configuration;
pub mod creation_log;
pub mod manifest;
pub mod plan;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use configuration::Configuration;
pub use creation_log::CreationLog;
pub use manifest::Manifest;
pub use project_structure::ProjectStructure;
