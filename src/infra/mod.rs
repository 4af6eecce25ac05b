//! Infrastructure layer - Storage backends
//!
//! The service stores everything in process memory; this module provides
//! the repository abstractions and their in-memory implementations.

pub mod repositories;

pub use repositories::{
    ContactRepository, InMemoryContactStore, InMemoryUserStore, UserRepository,
};
