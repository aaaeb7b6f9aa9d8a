//! Application services - orchestrate use cases.

pub mod completion;
pub mod scaffold_service;

pub use completion::CompletionLatch;
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
