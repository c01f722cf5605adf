//! Deneth Fashion storefront library.
//!
//! The headless core of the storefront: a catalog client for the remote
//! product API, the persisted shopping cart, the checkout workflow that
//! finalizes orders over WhatsApp, and the Gemini-backed style assistant.
//! Presentation (views, routing, animation) lives outside this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod state;
