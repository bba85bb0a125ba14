pub mod contact_service;
pub mod file_upload_service;

use super::Config;
use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use file_upload_service::{FileUploadService, FileUploadServiceApi};
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] roster_persistence::Error),

    /// errors that currently return early http status code Status::NotFound
    #[error("not found")]
    NotFound,

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),

    /// std io
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    /// error returned if the given file upload id is not a temp file we have
    #[error("No file found for file upload id")]
    NoFileForFileUploadId,
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
    pub file_upload_service: Arc<dyn FileUploadServiceApi>,
}

/// Wires the services up with the stores they depend on.
pub async fn create_service_context(config: Config, db: DbContext) -> Result<ServiceContext> {
    let contact_service = Arc::new(ContactService::new(
        db.contact_store.clone(),
        db.file_upload_store.clone(),
    ));
    let file_upload_service = Arc::new(FileUploadService::new(db.file_upload_store));

    Ok(ServiceContext {
        config,
        contact_service,
        file_upload_service,
    })
}
