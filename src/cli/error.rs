//! CLI-level errors (wraps infrastructure and config errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("family file not found: {0}")]
    InputNotFound(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Infra(InfraError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputNotFound(_) => crate::exitcode::NOINPUT,
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Infra(e) => match e {
                InfraError::Open { .. } => crate::exitcode::NOINPUT,
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Domain(DomainError::NodeNotFound(_)) => crate::exitcode::USAGE,
                InfraError::Domain(_) => crate::exitcode::DATAERR,
            },
        }
    }
}
