//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod contact;
pub mod password;
pub mod user;

pub use contact::{Contact, ContactResponse, CreateContact, UpdateContact};
pub use password::Password;
pub use user::User;
