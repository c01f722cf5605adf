//! Deneth Core - Shared types library.
//!
//! This crate provides common types used across the Deneth Fashion
//! storefront components:
//! - `storefront` - Catalog client, cart store, and checkout workflow
//! - `integration-tests` - Cross-component scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart items, orders, and money

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
