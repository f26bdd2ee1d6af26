//! Application-wide error types.
//!
//! The configuration resolver has no error channel; these cover the process
//! plumbing around it (logger, working directory, liveness listener).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("liveness error: {0}")]
    Liveness(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
