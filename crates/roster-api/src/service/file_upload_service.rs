use super::{Error, Result};
use crate::constants::{MAX_FILE_NAME_CHARACTERS, MAX_FILE_SIZE_BYTES, VALID_FILE_MIME_TYPES};
use crate::data::UploadFileResult;
use crate::util;
use crate::util::file::UploadFileHandler;
use async_trait::async_trait;
use log::{error, info};
use roster_persistence::file_upload::FileUploadStoreApi;
use std::sync::Arc;

#[async_trait]
pub trait FileUploadServiceApi: Send + Sync {
    /// validates the given uploaded file, checking file size, file name
    /// length and whether it is one of the accepted image types
    async fn validate_attached_file(&self, file: &dyn UploadFileHandler) -> Result<()>;

    /// uploads the file into a fresh temporary staging folder, returning
    /// the upload id the staged file can be picked up with later
    async fn upload_file(&self, file: &dyn UploadFileHandler) -> Result<UploadFileResult>;

    /// returns the file staged under the given upload id, if any
    async fn get_temp_file(&self, file_upload_id: &str) -> Result<Option<(String, Vec<u8>)>>;
}

/// The file upload service, managing staged avatar uploads
#[derive(Clone)]
pub struct FileUploadService {
    file_upload_store: Arc<dyn FileUploadStoreApi>,
}

impl FileUploadService {
    pub fn new(file_upload_store: Arc<dyn FileUploadStoreApi>) -> Self {
        Self { file_upload_store }
    }
}

#[async_trait]
impl FileUploadServiceApi for FileUploadService {
    async fn validate_attached_file(&self, file: &dyn UploadFileHandler) -> Result<()> {
        if file.is_empty() {
            return Err(Error::Validation(String::from(
                "Empty files can not be uploaded",
            )));
        }

        if file.len() > MAX_FILE_SIZE_BYTES as u64 {
            return Err(Error::Validation(format!(
                "Maximum file size is {MAX_FILE_SIZE_BYTES} bytes",
            )));
        }

        if let Some(file_name) = file.name() {
            if file_name.chars().count() > MAX_FILE_NAME_CHARACTERS {
                return Err(Error::Validation(format!(
                    "Maximum file name length is {MAX_FILE_NAME_CHARACTERS} characters",
                )));
            }
        }

        let detected_type = file.detect_content_type().await.map_err(|e| {
            error!("Could not detect content type for file: {e}");
            Error::Validation(String::from("Could not detect content type for file"))
        })?;

        match detected_type {
            Some(t) if VALID_FILE_MIME_TYPES.contains(&t.as_str()) => Ok(()),
            _ => Err(Error::Validation(String::from(
                "Only PNG, JPEG, GIF and WEBP images can be uploaded",
            ))),
        }
    }

    async fn upload_file(&self, file: &dyn UploadFileHandler) -> Result<UploadFileResult> {
        let file_upload_id = util::get_uuid_v4().to_string();
        self.file_upload_store
            .create_temp_upload_folder(&file_upload_id)
            .await?;

        let read_file_name = file.name().unwrap_or_else(|| String::from("unknown"));
        let file_name = util::file::generate_unique_filename(
            &util::file::sanitize_filename(&read_file_name),
            file.extension(),
        );
        let file_bytes = file.get_contents().await?;
        self.file_upload_store
            .write_temp_upload_file(&file_upload_id, &file_name, &file_bytes)
            .await?;
        info!("uploaded file {file_name} as {file_upload_id}");

        Ok(UploadFileResult { file_upload_id })
    }

    async fn get_temp_file(&self, file_upload_id: &str) -> Result<Option<(String, Vec<u8>)>> {
        if file_upload_id.is_empty()
            || !file_upload_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::Validation(format!(
                "Invalid file upload id: {file_upload_id}"
            )));
        }
        let files = self
            .file_upload_store
            .read_temp_upload_files(file_upload_id)
            .await
            .map_err(|_| Error::NoFileForFileUploadId)?;
        Ok(files.into_iter().next())
    }
}
