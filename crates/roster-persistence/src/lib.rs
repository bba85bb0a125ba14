pub mod contact;
pub mod file_upload;

use thiserror::Error;

/// Generic persistence result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic persistence error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error {0}")]
    Io(#[from] std::io::Error),

    #[error("no such {0} entity {1}")]
    NoSuchEntity(String, String),

    #[error("file name is not valid UTF-8: {0}")]
    InvalidFileName(String),
}

pub use contact::{ContactStoreApi, MemoryContactStore};
pub use file_upload::{FileUploadStore, FileUploadStoreApi};
