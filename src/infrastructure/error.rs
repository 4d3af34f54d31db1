//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("rendering level {level} failed: {source}")]
    Render {
        level: usize,
        #[source]
        source: ApplicationError,
    },

    #[error("upload command failed: {message}")]
    Upload {
        message: String,
        exit_code: Option<i32>,
    },
}
