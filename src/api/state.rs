//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{AuthService, ContactService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Contact service
    pub contact_service: Arc<dyn ContactService>,
}

impl AppState {
    /// Create application state from config, backed by fresh in-memory
    /// stores. This is the normal way to create AppState; all data lives
    /// for the process lifetime only.
    pub fn from_config(config: Config) -> Self {
        let container = Services::from_config(config);

        Self {
            auth_service: container.auth(),
            contact_service: container.contacts(),
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        contact_service: Arc<dyn ContactService>,
    ) -> Self {
        Self {
            auth_service,
            contact_service,
        }
    }
}
