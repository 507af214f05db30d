//! Cartside cart library.
//!
//! A shopping-cart state container for a client-side storefront: add, remove,
//! and update line items, persist the cart to a durable local slot, and
//! validate every mutation against the catalog's stock endpoint.
//!
//! # Architecture
//!
//! - [`catalog`] - REST client for the product/stock catalog (`reqwest`,
//!   product metadata cached via `moka`; stock is never cached)
//! - [`store`] - Durable string-keyed local storage (file-backed or in-memory)
//! - [`cart`] - The [`cart::CartState`] container tying the two together
//! - [`config`] - Environment-based configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use cartside_cart::cart::CartState;
//! use cartside_cart::catalog::CatalogClient;
//! use cartside_cart::config::CartConfig;
//! use cartside_cart::store::FileStore;
//! use cartside_core::ProductId;
//!
//! let config = CartConfig::from_env()?;
//! let catalog = Arc::new(CatalogClient::new(&config.catalog)?);
//! let store = Arc::new(FileStore::new(&config.store_path));
//! let cart = CartState::new(catalog, store)?;
//!
//! let snapshot = cart.add_product(ProductId::new(1)).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod store;
pub mod types;
