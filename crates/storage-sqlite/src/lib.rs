//! SQLite storage implementation for Hacks Anuais.
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. It provides:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - The snapshot-slot repository implementing the trait from `hacks-core`
//!
//! All other crates are database-agnostic and work with traits.

pub mod db;
pub mod errors;
pub mod schema;

pub mod snapshots;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from hacks-core for convenience
pub use hacks_core::errors::{DatabaseError, Error, Result};
