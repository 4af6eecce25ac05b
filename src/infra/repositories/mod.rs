//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data storage, following the
//! Repository pattern for clean separation of concerns. Each collection
//! is an independently synchronized shared resource.

mod contact_repository;
mod user_repository;

pub use contact_repository::{ContactRepository, InMemoryContactStore};
pub use user_repository::{InMemoryUserStore, UserRepository};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use contact_repository::MockContactRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
