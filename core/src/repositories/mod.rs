//! Repository ports for aggregate persistence.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
