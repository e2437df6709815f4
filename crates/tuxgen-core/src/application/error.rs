//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No template with this identifier in the store.
    #[error("Template '{id}' not found in {location}")]
    TemplateNotFound { id: String, location: String },

    /// Template rendering failed.
    #[error("Rendering template '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state lock poisoned.
    #[error("Store lock poisoned")]
    StoreLockError,

    /// The dependency installer could not run or exited non-zero.
    #[error("Dependency installation failed ({command}): {reason}")]
    InstallFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id, location } => vec![
                format!("Expected '{}.html' in {}", id, location),
                "Try: tuxgen templates to see where templates are loaded from".into(),
                "Or drop --templates to use the built-in templates".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the placeholders in template '{}'", template),
                "Placeholders look like <?= entityName ?> or <?- pathToEntity ?>".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::InstallFailed { command, .. } => vec![
                format!("Make sure '{}' is installed and on your PATH", command),
                "Re-run without --install and install dependencies manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::InstallFailed { .. } => ErrorCategory::External,
        }
    }
}
