use async_trait::async_trait;
use rocket::FromForm;
use rocket::fs::TempFile;
use roster_api::data::{Contact, UploadFileResult};
use roster_api::util::file::{UploadFileHandler, detect_content_type_for_bytes};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;
use utoipa::ToSchema;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub app_version: String,
}

/// A dummy response type signaling success of a request
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactsResponse<T> {
    pub contacts: Vec<T>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactWeb {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewContactPayload {
    pub name: String,
    pub email: String,
    pub avatar_file_upload_id: Option<String>,
}

#[derive(Debug, FromForm, ToSchema)]
pub struct UploadFileForm<'r> {
    #[schema(value_type = String, format = Binary)]
    pub file: TempFile<'r>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadFilesResponse {
    pub file_upload_id: String,
}

impl IntoWeb<UploadFilesResponse> for UploadFileResult {
    fn into_web(self) -> UploadFilesResponse {
        UploadFilesResponse {
            file_upload_id: self.file_upload_id,
        }
    }
}

// The upload handler trait lives in roster-api, so a newtype is needed to
// implement it for rocket's TempFile
pub struct TempFileWrapper<'a>(pub &'a TempFile<'a>);

#[async_trait]
impl UploadFileHandler for TempFileWrapper<'_> {
    async fn get_contents(&self) -> std::io::Result<Vec<u8>> {
        let mut opened = self.0.open().await?;
        let mut buf = Vec::with_capacity(self.0.len() as usize);
        opened.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    fn extension(&self) -> Option<String> {
        self.0
            .content_type()
            .and_then(|c| c.extension().map(|e| e.to_string()))
    }

    fn name(&self) -> Option<String> {
        self.0.name().map(|s| s.to_owned())
    }

    fn len(&self) -> u64 {
        self.0.len()
    }

    async fn detect_content_type(&self) -> std::io::Result<Option<String>> {
        let mut buffer = vec![0; 256];
        let mut opened = self.0.open().await?;
        let _bytes_read = opened.read(&mut buffer).await?;
        Ok(detect_content_type_for_bytes(&buffer))
    }
}
