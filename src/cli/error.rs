//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Render { .. } => crate::exitcode::CANTCREAT,
                InfraError::Upload { .. } => crate::exitcode::UNAVAILABLE,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } | ApplicationError::UploadNotConfigured => {
                        crate::exitcode::CONFIG
                    }
                    ApplicationError::OperationFailed { source, .. } => {
                        match source.downcast_ref::<InfraError>() {
                            Some(InfraError::Upload { .. }) => crate::exitcode::UNAVAILABLE,
                            _ => crate::exitcode::SOFTWARE,
                        }
                    }
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_invalid_args_when_mapping_then_usage_exit_code() {
        let err = CliError::InvalidArgs("level".into());
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_missing_upload_host_when_mapping_then_config_exit_code() {
        let err = CliError::from(ApplicationError::UploadNotConfigured);
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_failed_scp_when_mapping_then_unavailable_exit_code() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "scp".into(),
            source: Box::new(InfraError::Upload {
                message: "connection refused".into(),
                exit_code: Some(1),
            }),
        });
        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
    }

    #[test]
    fn given_render_failure_when_mapping_then_cantcreat_exit_code() {
        let err = CliError::from(InfraError::Render {
            level: 3,
            source: ApplicationError::OperationFailed {
                context: "save image: circles_3.png".into(),
                source: Box::new(std::io::Error::other("disk full")),
            },
        });
        assert_eq!(err.exit_code(), crate::exitcode::CANTCREAT);
        assert!(err.to_string().contains("disk full"), "{}", err);
    }
}
