//! User domain entity.

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// Ids are assigned sequentially by the credential store. A user is
/// immutable once registered; there are no update or delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new user record with an already-hashed password.
    pub fn new(id: u64, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }
}
