//! Post store implementations - PostgreSQL and in-memory fallback.

mod memory;

pub use memory::MemoryPostStore;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::PostgresPostStore;
