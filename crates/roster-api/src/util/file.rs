use async_trait::async_trait;
use std::{ffi::OsStr, path::Path};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadFileHandler: Send + Sync {
    /// Read the attached uploaded file
    async fn get_contents(&self) -> std::io::Result<Vec<u8>>;
    /// Returns the extension for an uploaded file
    fn extension(&self) -> Option<String>;
    /// Returns the name for an uploaded file
    fn name(&self) -> Option<String>;
    /// Returns the file length for an uploaded file
    fn len(&self) -> u64;
    /// Returns whether it's empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// detects the content type of the file by checking the first bytes
    async fn detect_content_type(&self) -> std::io::Result<Option<String>>;
}

/// Upload ids end up as folder names, so only accept the shape our own
/// generated ids have
pub fn validate_file_upload_id(file_upload_id: &Option<String>) -> crate::service::Result<()> {
    if let Some(id) = file_upload_id {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(crate::service::Error::Validation(format!(
                "Invalid file upload id: {id}"
            )));
        }
    }
    Ok(())
}

/// Function to sanitize the filename by removing unwanted characters.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.' || *c == '-' || *c == '_')
        .collect()
}

pub fn detect_content_type_for_bytes(bytes: &[u8]) -> Option<String> {
    if bytes.len() < 256 {
        return None; // can't decide with so few bytes
    }
    infer::get(&bytes[..256]).map(|t| t.mime_type().to_owned())
}

/// Function to generate a unique filename using UUID while preserving the file extension.
pub fn generate_unique_filename(original_filename: &str, extension: Option<String>) -> String {
    let path = Path::new(original_filename);
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or("");
    let extension = extension.unwrap_or_default();
    let optional_dot = if extension.is_empty() { "" } else { "." };
    format!("{}_{}{}{}", stem, super::get_uuid_v4(), optional_dot, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_filename_basic() {
        assert_eq!(
            sanitize_filename("AVA$TAR()()IMAGE.PN@@@G"),
            String::from("avatarimage.png")
        );
    }

    #[test]
    fn sanitize_filename_empty() {
        assert_eq!(sanitize_filename(""), String::from(""));
    }

    #[test]
    fn sanitize_filename_sane() {
        assert_eq!(
            sanitize_filename("avatar-october_2024.png"),
            String::from("avatar-october_2024.png")
        );
    }

    #[test]
    fn generate_unique_filename_basic() {
        assert_eq!(
            generate_unique_filename("avatar.png", Some(String::from("png"))),
            String::from("avatar_00000000-0000-0000-0000-000000000000.png")
        );
    }

    #[test]
    fn generate_unique_filename_no_ext() {
        assert_eq!(
            generate_unique_filename("avatar", None),
            String::from("avatar_00000000-0000-0000-0000-000000000000")
        );
    }

    #[test]
    fn validate_file_upload_id_baseline() {
        assert!(validate_file_upload_id(&None).is_ok());
        assert!(validate_file_upload_id(&Some(String::from("1234-abc"))).is_ok());
    }

    #[test]
    fn validate_file_upload_id_fails_if_empty() {
        assert!(validate_file_upload_id(&Some(String::from(""))).is_err());
    }

    #[test]
    fn validate_file_upload_id_fails_if_not_id_shaped() {
        assert!(validate_file_upload_id(&Some(String::from("../outside"))).is_err());
        assert!(validate_file_upload_id(&Some(String::from("with space"))).is_err());
    }
}
