//! Infrastructure adapters for h5-webpack.
//!
//! This crate implements the ports defined in
//! `h5webpack_core::application::ports`. It contains the template corpus and
//! every I/O operation the scaffold performs.

pub mod filesystem;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use templates::EmbeddedTemplates;
