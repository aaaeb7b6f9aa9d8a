// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown {kind} engine '{name}'")]
    UnknownEngine { kind: &'static str, name: String },

    #[error("Duplicate path in scaffold: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Scaffold plan is empty")]
    EmptyPlan,

    #[error("Failed to serialize manifest: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownEngine { kind: "stylesheet", name } => vec![
                format!("'{name}' is not a supported stylesheet engine"),
                "Supported engines: css, less, sass".into(),
            ],
            Self::UnknownEngine { kind, name } => vec![
                format!("'{name}' is not a supported {kind} engine"),
                "Supported engines: es2015, typescript, coffeescript".into(),
            ],
            _ => vec!["This is a bug in the scaffold plan, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownEngine { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
