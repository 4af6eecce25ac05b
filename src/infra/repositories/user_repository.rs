//! User repository - the credential store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Credential store trait for dependency injection.
///
/// Emails are matched case-sensitively, exactly as stored.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user with an already-hashed password.
    ///
    /// Assigns the next sequential id. Fails with `DuplicateUser` if the
    /// email is already present; the check and the insert happen under a
    /// single write lock so concurrent registrations cannot race.
    async fn create(&self, email: String, password_hash: String) -> AppResult<User>;
}

/// Users keyed by id, plus the id counter. Guarded as one unit so the
/// uniqueness check and the insert are atomic.
struct UserTable {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

/// In-memory credential store. State lives for the process lifetime.
pub struct InMemoryUserStore {
    inner: RwLock<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(UserTable {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let table = self.inner.read().await;
        Ok(table.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: String, password_hash: String) -> AppResult<User> {
        let mut table = self.inner.write().await;

        if table.users.values().any(|u| u.email == email) {
            return Err(AppError::DuplicateUser);
        }

        let id = table.next_id;
        table.next_id += 1;

        let user = User::new(id, email, password_hash);
        table.users.insert(id, user.clone());
        Ok(user)
    }
}
