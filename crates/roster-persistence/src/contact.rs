use roster_core::Contact;
use std::collections::HashMap;

use super::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns the whole collection, keyed by contact id
    async fn get_map(&self) -> Result<HashMap<String, Contact>>;
    /// Returns the whole collection as a list, in no particular order
    async fn get_all(&self) -> Result<Vec<Contact>>;
    /// Fetches the contact with the given id
    async fn get(&self, id: &str) -> Result<Option<Contact>>;
    /// Inserts the contact under the given id
    async fn insert(&self, id: &str, data: Contact) -> Result<()>;
    /// Deletes the contact with the given id
    async fn delete(&self, id: &str) -> Result<()>;
    /// Checks if a contact with the given id exists
    async fn exists(&self, id: &str) -> bool;
}

/// The mock backend, an in-process keyed collection. Holds everything
/// behind an RwLock so concurrent requests see a consistent snapshot.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStoreApi for MemoryContactStore {
    async fn get_map(&self) -> Result<HashMap<String, Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn get_all(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self.contacts.read().await.get(id).cloned())
    }

    async fn insert(&self, id: &str, data: Contact) -> Result<()> {
        self.contacts.write().await.insert(id.to_owned(), data);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        // deleting an id that is already gone is fine here, whether a
        // missing entity is an error is the caller's decision
        self.contacts.write().await.remove(id);
        Ok(())
    }

    async fn exists(&self, id: &str) -> bool {
        self.contacts.read().await.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            avatar_url: String::from("data:image/png;base64,"),
        }
    }

    #[tokio::test]
    async fn insert_and_get_baseline() {
        let store = MemoryContactStore::new();
        store
            .insert("ryan", contact("ryan", "Ryan Florence"))
            .await
            .expect("insert works");

        let fetched = store.get("ryan").await.expect("get works");
        assert_eq!(fetched.map(|c| c.name), Some("Ryan Florence".to_string()));
        assert!(store.exists("ryan").await);
        assert!(!store.exists("michael").await);
    }

    #[tokio::test]
    async fn get_all_returns_everything() {
        let store = MemoryContactStore::new();
        store
            .insert("ryan", contact("ryan", "Ryan Florence"))
            .await
            .expect("insert works");
        store
            .insert("michael", contact("michael", "Michael Jackson"))
            .await
            .expect("insert works");

        let all = store.get_all().await.expect("get_all works");
        assert_eq!(all.len(), 2);
        let map = store.get_map().await.expect("get_map works");
        assert!(map.contains_key("ryan"));
        assert!(map.contains_key("michael"));
    }

    #[tokio::test]
    async fn insert_replaces_existing_id() {
        let store = MemoryContactStore::new();
        store
            .insert("ryan", contact("ryan", "Ryan Florence"))
            .await
            .expect("insert works");
        store
            .insert("ryan", contact("ryan", "Ryan F."))
            .await
            .expect("insert works");

        let all = store.get_all().await.expect("get_all works");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ryan F.");
    }

    #[tokio::test]
    async fn delete_baseline() {
        let store = MemoryContactStore::new();
        store
            .insert("ryan", contact("ryan", "Ryan Florence"))
            .await
            .expect("insert works");
        store.delete("ryan").await.expect("delete works");
        assert!(!store.exists("ryan").await);
        assert!(store.get("ryan").await.expect("get works").is_none());
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_a_noop() {
        let store = MemoryContactStore::new();
        assert!(store.delete("nope").await.is_ok());
    }
}
