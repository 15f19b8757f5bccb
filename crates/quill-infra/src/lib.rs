//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains database, authentication, and hashing integrations.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM; without it
//!   only the in-memory repositories are available.

pub mod auth;
pub mod database;

pub use auth::{BcryptPasswordService, JwtConfig, JwtTokenService};
pub use database::{MemoryPostRepository, MemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
