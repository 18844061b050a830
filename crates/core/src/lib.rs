//! Domain-level types shared across the dishes workspace.
//!
//! This crate is deliberately small: the error taxonomy, id/timestamp
//! aliases, and well-known role names. Everything HTTP- or storage-specific
//! lives in `dishes-api` and `dishes-db`.

pub mod error;
pub mod roles;
pub mod types;
