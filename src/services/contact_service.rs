//! Contact service - owner-scoped contact use cases.
//!
//! Every operation is parameterized by the authenticated owner's id; the
//! service never exposes a path that crosses a tenant boundary.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Contact, CreateContact, UpdateContact};
use crate::errors::{AppError, AppResult};
use crate::infra::ContactRepository;

/// Contact service trait for dependency injection.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Create a contact owned by the caller
    async fn create_contact(&self, owner_id: u64, fields: CreateContact) -> AppResult<Contact>;

    /// List the caller's contacts in creation order
    async fn list_contacts(&self, owner_id: u64) -> AppResult<Vec<Contact>>;

    /// Merge supplied fields into one of the caller's contacts
    async fn update_contact(
        &self,
        owner_id: u64,
        contact_id: u64,
        changes: UpdateContact,
    ) -> AppResult<Contact>;

    /// Delete one of the caller's contacts
    async fn delete_contact(&self, owner_id: u64, contact_id: u64) -> AppResult<()>;
}

/// Concrete implementation of ContactService over a contact store.
pub struct ContactManager<R: ContactRepository> {
    contacts: Arc<R>,
}

impl<R: ContactRepository> ContactManager<R> {
    /// Create new contact service instance
    pub fn new(contacts: Arc<R>) -> Self {
        Self { contacts }
    }
}

#[async_trait]
impl<R: ContactRepository> ContactService for ContactManager<R> {
    async fn create_contact(&self, owner_id: u64, fields: CreateContact) -> AppResult<Contact> {
        if fields.name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }

        self.contacts.create(owner_id, fields).await
    }

    async fn list_contacts(&self, owner_id: u64) -> AppResult<Vec<Contact>> {
        self.contacts.list_by_owner(owner_id).await
    }

    async fn update_contact(
        &self,
        owner_id: u64,
        contact_id: u64,
        changes: UpdateContact,
    ) -> AppResult<Contact> {
        if matches!(&changes.name, Some(name) if name.is_empty()) {
            return Err(AppError::validation("Name is required"));
        }

        self.contacts.update(owner_id, contact_id, changes).await
    }

    async fn delete_contact(&self, owner_id: u64, contact_id: u64) -> AppResult<()> {
        self.contacts.delete(owner_id, contact_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockContactRepository;
    use crate::infra::InMemoryContactStore;

    fn named(name: &str) -> CreateContact {
        CreateContact {
            name: name.to_string(),
            phone: None,
            email: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_name_before_reaching_the_store() {
        // No expectations set: any store call would panic the test
        let service = ContactManager::new(Arc::new(MockContactRepository::new()));

        let err = service.create_contact(1, named("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_rejects_empty_name_before_reaching_the_store() {
        let service = ContactManager::new(Arc::new(MockContactRepository::new()));

        let err = service
            .update_contact(
                1,
                1,
                UpdateContact {
                    name: Some(String::new()),
                    ..UpdateContact::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_propagates_not_found_from_the_store() {
        let mut repo = MockContactRepository::new();
        repo.expect_update()
            .returning(|_, _, _| Err(AppError::NotFound));

        let service = ContactManager::new(Arc::new(repo));
        let err = service
            .update_contact(1, 99, UpdateContact::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn tenants_never_observe_each_other() {
        let service = ContactManager::new(Arc::new(InMemoryContactStore::new()));
        let a_contact = service.create_contact(1, named("Ann")).await.unwrap();
        service.create_contact(2, named("Ben")).await.unwrap();

        let b_list = service.list_contacts(2).await.unwrap();
        assert!(b_list.iter().all(|c| c.owner_id == 2));

        let update = service
            .update_contact(2, a_contact.id, UpdateContact::default())
            .await;
        assert!(matches!(update.unwrap_err(), AppError::NotFound));

        let delete = service.delete_contact(2, a_contact.id).await;
        assert!(matches!(delete.unwrap_err(), AppError::NotFound));
    }
}
