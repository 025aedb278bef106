//! Jobs service error types.

use crate::request::RequestError;

/// Errors from a job search.
#[derive(Debug, thiserror::Error)]
pub enum JobsError {
    /// The request was rejected before any cache or network access.
    #[error("{0}")]
    Validation(String),

    /// The request was sent and failed.
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl JobsError {
    /// Message to show the user.
    pub fn user_message(&self) -> &str {
        match self {
            JobsError::Validation(msg) => msg,
            JobsError::Request(err) => &err.user_message,
        }
    }
}

impl From<JobsError> for jobscraper_core::Error {
    fn from(err: JobsError) -> Self {
        match err {
            JobsError::Validation(msg) => jobscraper_core::Error::InvalidInput(msg),
            JobsError::Request(err) => jobscraper_core::Error::FetchFailed(err.user_message),
        }
    }
}
