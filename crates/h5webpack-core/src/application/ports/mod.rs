//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `h5webpack-adapters` implement
//! these.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `TemplateStore`: Verbatim template bytes
//!   - `TemplateRenderer`: Template rendering
//!   - `ProgressReporter`: `create : <path>` lines and the completion hook

pub mod output;

pub use output::{Filesystem, ProgressReporter, TemplateRenderer, TemplateStore};
