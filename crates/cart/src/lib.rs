//! Marigold Cart - the cart state engine.
//!
//! This crate owns the canonical cart state for the storefront. The
//! [`CartStore`] holds the ordered sequence of cart lines and is the single
//! source of truth: every UI action (add, quantity change, removal, checkout)
//! goes through one of its operations, which mutates the collection, saves it
//! through a [`CartStorage`] slot, and announces user-visible outcomes to an
//! [`EventSink`]. The rendering layer never mutates lines; it pulls a
//! read-only snapshot and feeds it to the pure [`project`] function.
//!
//! # Modules
//!
//! - [`store`] - The cart store and its operations
//! - [`storage`] - The persistence slot trait and its implementations
//! - [`project`] - Pure projection of cart state into display data
//! - [`notify`] - The notification sink contract for UI toasts
//! - [`receipt`] - Checkout receipts and order numbers
//! - [`error`] - The cart error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod notify;
pub mod project;
pub mod receipt;
pub mod storage;
pub mod store;

pub use error::CartError;
pub use notify::{EventSink, NullSink, RecordingSink, Severity, TracingSink};
pub use project::{DisplayLine, DisplayModel, project};
pub use receipt::Receipt;
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::{CartStore, CheckoutOutcome};
