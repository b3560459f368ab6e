//! # Postbox Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in
//! `postbox-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! Without `postgres` the crate only offers the in-memory store.

pub mod database;
pub mod store;

// Re-exports - In-Memory
pub use store::MemoryPostStore;

// Re-exports - PostgreSQL
pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use store::PostgresPostStore;
