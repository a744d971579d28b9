//! # Identra Core
//!
//! Core business logic and domain layer for the Identra backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AuthResponse, Claims, Email, EntityMeta, EventDispatcher, NoOpEventDispatcher, Password,
    TokenPair, User, UserEvent, UserEventKind, UserStatus, UserSummary, Username,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, CredentialVerifier, RepositoryCredentialVerifier,
    TokenService, TokenServiceConfig, UserService,
};
