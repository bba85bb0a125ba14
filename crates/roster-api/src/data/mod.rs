pub use roster_core::contact;
pub use roster_core::list;

pub use roster_core::Contact;
pub use roster_core::{ContactList, ListSummary, ListView};

/// Handed out for a successfully staged upload, the id is passed back
/// when the contact is created.
#[derive(Debug, Clone)]
pub struct UploadFileResult {
    pub file_upload_id: String,
}
