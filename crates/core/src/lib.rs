//! Marigold Core - Shared types library.
//!
//! This crate provides the common types used across all Marigold components:
//! - `cart` - The cart state engine (store, persistence, projection)
//! - `cli` - The storefront command-line controller
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no persistence,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart entry, entry identity, entry kind, and money helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
