// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The domain is mostly total: name derivation and path resolution never
/// fail. What remains are parse failures at the edges where raw strings
/// become value objects.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("unknown view engine: {0}")]
    UnknownViewEngine(String),

    #[error("unknown template id: {0}")]
    UnknownTemplate(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownEntityType(value) => vec![
                format!("'{}' is not an entity type", value),
                "Supported types: element, behavior".into(),
            ],
            Self::UnknownViewEngine(value) => vec![
                format!("'{}' is not a view engine", value),
                "Supported engines: html, ejs, jade".into(),
            ],
            Self::UnknownTemplate(value) => vec![
                format!("'{}' is not a template identifier", value),
                "Try: tuxgen templates".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownEntityType(_) | Self::UnknownViewEngine(_) => ErrorCategory::Validation,
            Self::UnknownTemplate(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
