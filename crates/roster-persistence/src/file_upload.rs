use std::path::{Path, PathBuf};

use super::{Error, Result};
use async_trait::async_trait;
use log::info;
use tokio::fs::{create_dir_all, read, read_dir, remove_dir_all, write};

#[async_trait]
pub trait FileUploadStoreApi: Send + Sync {
    /// Creates the temp folder for the given file upload id
    async fn create_temp_upload_folder(&self, file_upload_id: &str) -> Result<()>;
    /// Removes the temp folder for the given file upload id with everything in it
    async fn remove_temp_upload_folder(&self, file_upload_id: &str) -> Result<()>;
    /// Writes the given file into the temp folder of the given file upload id
    async fn write_temp_upload_file(
        &self,
        file_upload_id: &str,
        file_name: &str,
        file_bytes: &[u8],
    ) -> Result<()>;
    /// Reads all files from the temp folder of the given file upload id
    async fn read_temp_upload_files(&self, file_upload_id: &str) -> Result<Vec<(String, Vec<u8>)>>;
    /// Removes all temp folders, used to sweep leftovers at startup
    async fn cleanup_temp_uploads(&self) -> Result<()>;
}

/// Holds staged uploads on disk under `<data_dir>/<temp_upload_path>/<id>/`
/// until contact creation consumes them.
#[derive(Clone)]
pub struct FileUploadStore {
    temp_upload_folder: String,
}

impl FileUploadStore {
    pub async fn new(data_dir: &str, temp_upload_path: &str) -> Result<Self> {
        let temp_upload_folder = file_storage_path(data_dir, temp_upload_path).await?;
        Ok(Self { temp_upload_folder })
    }

    pub fn get_path_for_upload_id(&self, file_upload_id: &str) -> PathBuf {
        PathBuf::from(self.temp_upload_folder.as_str()).join(file_upload_id)
    }
}

#[async_trait]
impl FileUploadStoreApi for FileUploadStore {
    async fn create_temp_upload_folder(&self, file_upload_id: &str) -> Result<()> {
        let folder_path = self.get_path_for_upload_id(file_upload_id);
        if !folder_path.exists() {
            create_dir_all(&folder_path).await?;
        }
        Ok(())
    }

    async fn remove_temp_upload_folder(&self, file_upload_id: &str) -> Result<()> {
        let folder_path = self.get_path_for_upload_id(file_upload_id);
        if folder_path.exists() {
            info!("deleting temp upload folder for {file_upload_id}");
            remove_dir_all(&folder_path).await?;
        }
        Ok(())
    }

    async fn write_temp_upload_file(
        &self,
        file_upload_id: &str,
        file_name: &str,
        file_bytes: &[u8],
    ) -> Result<()> {
        let file_path = self.get_path_for_upload_id(file_upload_id).join(file_name);
        write(file_path, file_bytes).await?;
        Ok(())
    }

    async fn read_temp_upload_files(&self, file_upload_id: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let folder_path = self.get_path_for_upload_id(file_upload_id);
        if !folder_path.exists() {
            return Err(Error::NoSuchEntity(
                "file upload".to_string(),
                file_upload_id.to_owned(),
            ));
        }

        let mut files = vec![];
        let mut dir = read_dir(&folder_path).await?;
        while let Some(entry) = dir.next_entry().await? {
            let metadata = entry.metadata().await?;
            if metadata.is_file() {
                let name_os = entry.file_name();
                let file_name = name_os
                    .to_str()
                    .ok_or_else(|| Error::InvalidFileName(name_os.to_string_lossy().into_owned()))?
                    .to_owned();
                let file_bytes = read(entry.path()).await?;
                files.push((file_name, file_bytes));
            }
        }
        Ok(files)
    }

    async fn cleanup_temp_uploads(&self) -> Result<()> {
        info!("cleaning up temp upload folder of leftover uploads");
        let mut dir = read_dir(Path::new(&self.temp_upload_folder)).await?;
        while let Some(entry) = dir.next_entry().await? {
            let metadata = entry.metadata().await?;
            if metadata.is_dir() {
                remove_dir_all(entry.path()).await?;
            }
        }
        Ok(())
    }
}

async fn file_storage_path(data_dir: &str, path: &str) -> Result<String> {
    let directory = format!("{data_dir}/{path}");
    if !Path::new(&directory).exists() {
        create_dir_all(&directory).await?;
    }
    Ok(directory)
}
