#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use roster_core::Contact;
    use roster_persistence::{ContactStoreApi, Result, file_upload::FileUploadStoreApi};
    use std::collections::HashMap;
    use std::io::Cursor;

    // The store traits live in a different crate, so the mocks need to be
    // wrapped here
    mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn get_map(&self) -> Result<HashMap<String, Contact>>;
            async fn get_all(&self) -> Result<Vec<Contact>>;
            async fn get(&self, id: &str) -> Result<Option<Contact>>;
            async fn insert(&self, id: &str, data: Contact) -> Result<()>;
            async fn delete(&self, id: &str) -> Result<()>;
            async fn exists(&self, id: &str) -> bool;
        }
    }

    mock! {
        pub FileUploadStoreApiMock {}

        #[async_trait]
        impl FileUploadStoreApi for FileUploadStoreApiMock {
            async fn create_temp_upload_folder(&self, file_upload_id: &str) -> Result<()>;
            async fn remove_temp_upload_folder(&self, file_upload_id: &str) -> Result<()>;
            async fn write_temp_upload_file(
                &self,
                file_upload_id: &str,
                file_name: &str,
                file_bytes: &[u8],
            ) -> Result<()>;
            async fn read_temp_upload_files(&self, file_upload_id: &str) -> Result<Vec<(String, Vec<u8>)>>;
            async fn cleanup_temp_uploads(&self) -> Result<()>;
        }
    }

    pub fn init_test_cfg() {
        if crate::CONFIG.get().is_none() {
            let _ = crate::init(crate::Config {
                data_dir: ".".to_string(),
                avatar_max_height: 64,
            });
        }
    }

    pub fn empty_contact() -> Contact {
        Contact {
            id: "".to_string(),
            name: "".to_string(),
            email: "".to_string(),
            avatar_url: "".to_string(),
        }
    }

    pub fn demo_contacts() -> Vec<Contact> {
        fn contact(id: &str, name: &str) -> Contact {
            Contact {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{id}@example.com"),
                avatar_url: "data:image/svg+xml;base64,".to_string(),
            }
        }
        // deliberately not in name order
        vec![
            contact("tyler", "Tyler McGinnis"),
            contact("ryan", "Ryan Florence"),
            contact("michael", "Michael Jackson"),
        ]
    }

    /// A valid PNG of the given dimensions, for avatar pipeline tests
    pub fn test_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::new_rgb8(width, height);
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png)
            .expect("png can be encoded");
        bytes.into_inner()
    }
}
