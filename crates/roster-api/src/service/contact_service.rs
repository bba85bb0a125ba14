use super::{Error, Result};
use crate::{get_config, util};
use async_trait::async_trait;
use log::{error, info};
use roster_core::{Contact, ContactList};
use roster_persistence::{ContactStoreApi, file_upload::FileUploadStoreApi};
use std::sync::Arc;

/// The fixture the store is filled with when demo seeding is enabled.
const DEMO_CONTACTS: [(&str, &str, &str); 3] = [
    ("ryan", "Ryan Florence", "ryan@reacttraining.com"),
    ("michael", "Michael Jackson", "michael@reacttraining.com"),
    ("tyler", "Tyler McGinnis", "tyler@reacttraining.com"),
];

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns the full contact collection
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Returns the contacts whose name contains the given term, sorted by
    /// name, with the same matching the list screen uses
    async fn search_contacts(&self, search_term: &str) -> Result<Vec<Contact>>;

    /// Returns the contact with the given id
    async fn get_contact(&self, id: &str) -> Result<Contact>;

    /// Creates a new contact with a fresh id, resolving a staged avatar
    /// upload into an inline thumbnail if one was given
    async fn add_contact(
        &self,
        name: &str,
        email: &str,
        avatar_file_upload_id: Option<String>,
    ) -> Result<Contact>;

    /// Deletes the contact with the given id
    async fn delete(&self, id: &str) -> Result<()>;

    /// Fills an empty store with the demo fixture, returning how many
    /// contacts were added
    async fn seed_demo_contacts(&self) -> Result<usize>;
}

/// The contact service, owning all access to the contact collection
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
    file_upload_store: Arc<dyn FileUploadStoreApi>,
}

impl ContactService {
    pub fn new(
        store: Arc<dyn ContactStoreApi>,
        file_upload_store: Arc<dyn FileUploadStoreApi>,
    ) -> Self {
        Self {
            store,
            file_upload_store,
        }
    }

    /// Resolves the avatar for a new contact. A staged upload is decoded and
    /// shrunk into an inline thumbnail, without an upload the contact gets a
    /// generated initial-letter placeholder.
    async fn resolve_avatar(
        &self,
        name: &str,
        avatar_file_upload_id: &Option<String>,
    ) -> Result<String> {
        match avatar_file_upload_id {
            Some(upload_id) => {
                let files = self
                    .file_upload_store
                    .read_temp_upload_files(upload_id)
                    .await
                    .map_err(|_| Error::NoFileForFileUploadId)?;
                let (_file_name, file_bytes) = files
                    .into_iter()
                    .next()
                    .ok_or(Error::NoFileForFileUploadId)?;
                util::image::avatar_thumbnail(&file_bytes, get_config().avatar_max_height)
            }
            None => Ok(util::image::placeholder_avatar(name)),
        }
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.store.get_all().await?;
        Ok(contacts)
    }

    async fn search_contacts(&self, search_term: &str) -> Result<Vec<Contact>> {
        let contacts = self.store.get_all().await?;
        let list = ContactList::with_query(search_term);
        let found = list
            .derive(&contacts)
            .rows()
            .iter()
            .map(|&c| c.clone())
            .collect();
        Ok(found)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact> {
        match self.store.get(id).await? {
            Some(contact) => Ok(contact),
            None => Err(Error::NotFound),
        }
    }

    async fn add_contact(
        &self,
        name: &str,
        email: &str,
        avatar_file_upload_id: Option<String>,
    ) -> Result<Contact> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(Error::Validation(String::from("Name can't be empty")));
        }
        if email.is_empty() {
            return Err(Error::Validation(String::from("Email can't be empty")));
        }
        util::file::validate_file_upload_id(&avatar_file_upload_id)?;

        let avatar_url = self.resolve_avatar(name, &avatar_file_upload_id).await?;

        let id = util::get_uuid_v4().to_string();
        let contact = Contact {
            id: id.clone(),
            name: name.to_owned(),
            email: email.to_owned(),
            avatar_url,
        };
        self.store.insert(&id, contact.clone()).await?;

        // clean up the staged upload, if there was one, logging any errors
        if let Some(ref upload_id) = avatar_file_upload_id {
            if let Err(e) = self
                .file_upload_store
                .remove_temp_upload_folder(upload_id)
                .await
            {
                error!("Error while cleaning up temporary file uploads for {upload_id}: {e}");
            }
        }

        info!("created contact {id}");
        Ok(contact)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if !self.store.exists(id).await {
            return Err(Error::NotFound);
        }
        self.store.delete(id).await?;
        info!("removed contact {id}");
        Ok(())
    }

    async fn seed_demo_contacts(&self) -> Result<usize> {
        if !self.store.get_all().await?.is_empty() {
            return Ok(0);
        }
        for (id, name, email) in DEMO_CONTACTS {
            let contact = Contact {
                id: id.to_owned(),
                name: name.to_owned(),
                email: email.to_owned(),
                avatar_url: util::image::placeholder_avatar(name),
            };
            self.store.insert(id, contact).await?;
        }
        Ok(DEMO_CONTACTS.len())
    }
}
