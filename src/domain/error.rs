//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed family files and bad queries.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("illegal line format at line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("parent not found at line {line_no}: {label}")]
    ParentNotFound { line_no: usize, label: String },

    #[error("node not found: {0}")]
    NodeNotFound(String),
}

impl DomainError {
    /// The label (or offending line text) carried by this error.
    pub fn subject(&self) -> &str {
        match self {
            DomainError::MalformedLine { line, .. } => line,
            DomainError::ParentNotFound { label, .. } => label,
            DomainError::NodeNotFound(label) => label,
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
