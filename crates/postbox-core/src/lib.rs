//! # Postbox Core
//!
//! The domain layer of the Postbox service.
//! This crate contains the post entity and the store port, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
