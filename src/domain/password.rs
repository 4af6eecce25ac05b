//! Password value object - Domain layer password handling.
//!
//! Encapsulates salted one-way hashing so no other layer ever sees or
//! stores a plaintext password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// A hash in valid PHC form that no input verifies against. Must parse, so
/// verification runs the full argon2 computation instead of failing early.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Salted password hash.
///
/// Uses argon2id with default parameters, which keeps verification cost in
/// the ~100ms range. The plaintext is consumed at construction and never
/// stored.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never reveal the hash, even in debug output
        write!(f, "Password(\"[REDACTED]\")")
    }
}

impl Password {
    /// Hash a plaintext password under a fresh random salt.
    ///
    /// # Errors
    /// Returns an internal error if hashing fails.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Rebuild a Password from a hash held by the credential store.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// A password no input verifies against.
    ///
    /// Login verifies against this when the email names no account, so the
    /// attempt costs the same as one against a real account and the two
    /// failures stay indistinguishable.
    pub fn dummy() -> Self {
        Self::from_hash(DUMMY_HASH.to_string())
    }

    /// Consume and return the hash string for the credential store.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext password against this hash.
    ///
    /// An unparseable stored hash can never match.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
