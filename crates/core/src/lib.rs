//! Cartside Core - Shared types library.
//!
//! This crate provides common types used across all Cartside components:
//! - `cart` - The cart state container and catalog client
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`collection`] - Generic keyed-collection helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod types;

pub use collection::{Keyed, append, remove_by_key, replace_by_key};
pub use types::*;
