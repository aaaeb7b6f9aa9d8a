//! Unified error handling for h5-webpack core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for h5-webpack core operations.
#[derive(Debug, Error, Clone)]
pub enum H5Error {
    /// Errors from the domain layer (planning and validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (templates, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl H5Error {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Filesystem failures keep their path so the CLI can name it.
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::FilesystemError { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type H5Result<T> = Result<T, H5Error>;
