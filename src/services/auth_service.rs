//! Authentication service - credential checks and token issue/verify.
//!
//! Passwords are hashed through the domain Password value object before
//! they ever reach a repository; tokens are stateless signed claims, so
//! verification needs no store access.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{Config, TOKEN_TTL_SECONDS};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: u64,
    pub iat: i64,
    pub exp: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token, valid for one hour
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, email: String, password: String) -> AppResult<User>;

    /// Login and return a signed token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a signed token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id,
        iat: now,
        exp: now + TOKEN_TTL_SECONDS,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse { token })
}

/// Verify a token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::default();
    // No clock leeway: the expiry boundary is exact
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &validation,
    )?;

    // The library still accepts a token at the exact expiry instant;
    // the contract is that at-or-after the instant fails.
    if token_data.claims.exp <= Utc::now().timestamp() {
        return Err(AppError::Jwt(
            jsonwebtoken::errors::ErrorKind::ExpiredSignature.into(),
        ));
    }

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService over a credential store.
pub struct Authenticator<R: UserRepository> {
    users: Arc<R>,
    config: Config,
}

impl<R: UserRepository> Authenticator<R> {
    /// Create new auth service instance
    pub fn new(users: Arc<R>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl<R: UserRepository> AuthService for Authenticator<R> {
    async fn register(&self, email: String, password: String) -> AppResult<User> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password required"));
        }

        // Cheap pre-check; the store re-checks under its write lock
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateUser);
        }

        // Hash before touching the store so the slow step never holds its lock
        let password_hash = Password::new(&password)?.into_string();
        self.users.create(email, password_hash).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.users.find_by_email(&email).await?;

        // SECURITY: verify against a dummy hash when the email names no
        // account, so unknown-email and wrong-password attempts cost the
        // same and return the same error.
        let stored_password = user_result
            .as_ref()
            .map(|user| Password::from_hash(user.password_hash.clone()))
            .unwrap_or_else(Password::dummy);

        let password_valid = stored_password.verify(&password);

        // Only succeed if both the user exists AND the password verified
        match user_result {
            Some(user) if password_valid => generate_token(&user, &self.config),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_config() -> Config {
        std::env::set_var("JWT_SECRET", "test-secret-key-for-testing-only-32chars");
        Config::from_env()
    }

    fn authenticator(repo: MockUserRepository) -> Authenticator<MockUserRepository> {
        Authenticator::new(Arc::new(repo), test_config())
    }

    fn stored_user(id: u64, email: &str, password: &str) -> User {
        User::new(
            id,
            email.to_string(),
            Password::new(password).unwrap().into_string(),
        )
    }

    #[tokio::test]
    async fn register_rejects_empty_fields() {
        let service = authenticator(MockUserRepository::new());

        let err = service
            .register(String::new(), "pw".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = service
            .register("a@x.com".to_string(), String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn register_rejects_existing_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(User::new(1, email.to_string(), "hash".to_string()))));

        let service = authenticator(repo);
        let err = service
            .register("a@x.com".to_string(), "pw1".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateUser));
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|email, password_hash| {
            assert_ne!(password_hash, "pw1");
            assert!(password_hash.starts_with("$argon2"));
            Ok(User::new(1, email, password_hash))
        });

        let service = authenticator(repo);
        let user = service
            .register("a@x.com".to_string(), "pw1".to_string())
            .await
            .unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|email| {
            if email == "known@x.com" {
                Ok(Some(stored_user(1, email, "right-password")))
            } else {
                Ok(None)
            }
        });

        let service = authenticator(repo);

        let wrong_password = service
            .login("known@x.com".to_string(), "wrong".to_string())
            .await
            .unwrap_err();
        let unknown_email = service
            .login("nobody@x.com".to_string(), "wrong".to_string())
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn issued_token_verifies_as_the_issuing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(42, email, "pw1"))));

        let service = authenticator(repo);
        let token = service
            .login("a@x.com".to_string(), "pw1".to_string())
            .await
            .unwrap();

        let claims = service.verify_token(&token.token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);
    }

    #[tokio::test]
    async fn tampered_signature_fails_verification() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(1, email, "pw1"))));

        let service = authenticator(repo);
        let token = service
            .login("a@x.com".to_string(), "pw1".to_string())
            .await
            .unwrap()
            .token;

        // Flip the final signature byte
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(service.verify_token(&tampered).is_err());
        assert!(service.verify_token(&token).is_ok());
    }

    #[test]
    fn token_at_expiry_instant_is_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp();

        let expired = Claims {
            sub: 1,
            iat: now - TOKEN_TTL_SECONDS,
            exp: now,
        };
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret(config.jwt_secret_bytes()),
        )
        .unwrap();

        assert!(verify_token_internal(&token, &config).is_err());
    }

    #[test]
    fn token_before_expiry_is_accepted() {
        let config = test_config();
        let now = Utc::now().timestamp();

        let live = Claims {
            sub: 1,
            iat: now,
            exp: now + 5,
        };
        let token = encode(
            &Header::default(),
            &live,
            &EncodingKey::from_secret(config.jwt_secret_bytes()),
        )
        .unwrap();

        let claims = verify_token_internal(&token, &config).unwrap();
        assert_eq!(claims.sub, 1);
    }

    #[test]
    fn malformed_token_is_rejected() {
        let config = test_config();
        assert!(verify_token_internal("not-a-token", &config).is_err());
    }
}
