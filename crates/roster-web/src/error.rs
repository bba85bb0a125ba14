use roster_api::service;
use thiserror::Error;

/// Generic result type
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the contact API service layer
    #[error("Service error: {0}")]
    Service(#[from] service::Error),
}
