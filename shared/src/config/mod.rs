//! Configuration module
//!
//! Only configuration consumed by the domain layer lives here. HTTP
//! server, database and cache settings belong to the deployment that
//! embeds these crates.

pub mod auth;

pub use auth::JwtConfig;
