//! Contact repository - owner-scoped contact storage.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{Contact, CreateContact, UpdateContact};
use crate::errors::{AppError, AppResult};

/// Contact store trait for dependency injection.
///
/// Every operation takes the caller's `owner_id` as an implicit filter; a
/// contact owned by someone else is indistinguishable from a nonexistent
/// one (`NotFound` either way).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new contact owned by `owner_id`, with the next sequential id.
    async fn create(&self, owner_id: u64, fields: CreateContact) -> AppResult<Contact>;

    /// All contacts owned by `owner_id`, in creation order.
    async fn list_by_owner(&self, owner_id: u64) -> AppResult<Vec<Contact>>;

    /// Merge supplied fields into the owner's contact.
    async fn update(
        &self,
        owner_id: u64,
        contact_id: u64,
        changes: UpdateContact,
    ) -> AppResult<Contact>;

    /// Remove the owner's contact entirely.
    async fn delete(&self, owner_id: u64, contact_id: u64) -> AppResult<()>;
}

/// Contacts keyed by id, plus the id counter. Ids are monotonic across all
/// owners, so id order is creation order.
struct ContactTable {
    contacts: BTreeMap<u64, Contact>,
    next_id: u64,
}

/// In-memory contact store, synchronized independently of the user store.
pub struct InMemoryContactStore {
    inner: RwLock<ContactTable>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ContactTable {
                contacts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactStore {
    async fn create(&self, owner_id: u64, fields: CreateContact) -> AppResult<Contact> {
        let mut table = self.inner.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let contact = Contact::new(id, owner_id, fields);
        table.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn list_by_owner(&self, owner_id: u64) -> AppResult<Vec<Contact>> {
        let table = self.inner.read().await;
        Ok(table
            .contacts
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        owner_id: u64,
        contact_id: u64,
        changes: UpdateContact,
    ) -> AppResult<Contact> {
        let mut table = self.inner.write().await;

        let contact = table
            .contacts
            .get_mut(&contact_id)
            .filter(|c| c.owner_id == owner_id)
            .ok_or(AppError::NotFound)?;

        contact.apply(changes);
        Ok(contact.clone())
    }

    async fn delete(&self, owner_id: u64, contact_id: u64) -> AppResult<()> {
        let mut table = self.inner.write().await;

        let owned = table
            .contacts
            .get(&contact_id)
            .map(|c| c.owner_id == owner_id)
            .unwrap_or(false);
        if !owned {
            return Err(AppError::NotFound);
        }

        table.contacts.remove(&contact_id);
        Ok(())
    }
}
