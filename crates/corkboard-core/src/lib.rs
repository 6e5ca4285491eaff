//! # Corkboard Core
//!
//! The domain layer of the Corkboard message board.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post entity, the store and secret-scheme ports, and the weekly
//! statistics aggregation.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
