//! # Corkboard Infrastructure
//!
//! Concrete implementations of the ports defined in `corkboard-core`:
//! the PostgreSQL post store, an in-memory fallback, and the secret
//! schemes guarding post mutations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory store and plaintext secrets only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `hashing` - Argon2 secret scheme

pub mod database;
pub mod secret;

pub use database::InMemoryPostRepository;
pub use secret::PlaintextSecret;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};

#[cfg(feature = "hashing")]
pub use secret::Argon2Secret;
