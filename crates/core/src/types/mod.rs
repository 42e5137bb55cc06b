//! Core types for Marigold.
//!
//! This module provides the cart entry data model and money helpers.

pub mod entry;
pub mod money;

pub use entry::{CartEntry, EntryError, EntryIdentity, EntryKind, NewEntry};
pub use money::{format_rand, round_half_up};
