//! Service Container - Centralized service access.
//!
//! Wires the in-memory stores into service implementations and exposes
//! them behind trait objects for handler code and tests.

use std::sync::Arc;

use super::{AuthService, Authenticator, ContactManager, ContactService};
use crate::config::Config;
use crate::infra::{InMemoryContactStore, InMemoryUserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get contact service
    fn contacts(&self) -> Arc<dyn ContactService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    contact_service: Arc<dyn ContactService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(auth_service: Arc<dyn AuthService>, contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            auth_service,
            contact_service,
        }
    }

    /// Create service container over fresh in-memory stores.
    ///
    /// The user and contact collections are synchronized independently;
    /// their invariants never span both stores.
    pub fn from_config(config: Config) -> Self {
        let users = Arc::new(InMemoryUserStore::new());
        let contacts = Arc::new(InMemoryContactStore::new());

        Self {
            auth_service: Arc::new(Authenticator::new(users, config)),
            contact_service: Arc::new(ContactManager::new(contacts)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn contacts(&self) -> Arc<dyn ContactService> {
        self.contact_service.clone()
    }
}
