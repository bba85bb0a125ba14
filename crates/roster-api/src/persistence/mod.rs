use crate::Config;
use log::error;
use roster_persistence::{
    ContactStoreApi, FileUploadStore, MemoryContactStore, file_upload::FileUploadStoreApi,
};
use std::sync::Arc;

pub use roster_persistence::Error;

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
    pub file_upload_store: Arc<dyn FileUploadStoreApi>,
}

/// Creates a new instance of the DbContext with the given configuration.
pub async fn get_db_context(conf: &Config) -> roster_persistence::Result<DbContext> {
    let contact_store = Arc::new(MemoryContactStore::new());
    let file_upload_store = Arc::new(FileUploadStore::new(&conf.data_dir, "temp_uploads").await?);

    if let Err(e) = file_upload_store.cleanup_temp_uploads().await {
        error!("Error cleaning up temp upload folder: {e}");
    }

    Ok(DbContext {
        contact_store,
        file_upload_store,
    })
}
