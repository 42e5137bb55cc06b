//! The cart store: canonical cart state and its invariants.
//!
//! [`CartStore`] owns the ordered entry sequence and is the only component
//! that mutates it. Every operation runs synchronously to completion, so the
//! sequence is never observed mid-mutation. After each mutation the store
//! saves through its [`CartStorage`] slot (failures are logged, never fatal)
//! and announces add/checkout outcomes to its [`EventSink`].
//!
//! Invariants held at every operation boundary:
//!
//! - every retained entry has `quantity >= 1`
//! - `(name, kind)` identities are unique
//! - services carry a provider, items never do
//! - totals and counts are recomputed from the entries on every query

use std::collections::HashSet;

use marigold_core::{CartEntry, EntryIdentity, NewEntry};
use rust_decimal::Decimal;

use crate::error::{CartError, Result};
use crate::notify::{EventSink, Severity};
use crate::receipt::Receipt;
use crate::storage::CartStorage;

/// Outcome of a checkout attempt.
///
/// An empty cart is a normal user action, not a failure, so checkout reports
/// it as a variant instead of an error.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The cart was paid and cleared; the receipt holds what was bought.
    Completed(Receipt),
    /// There was nothing to check out; the cart is untouched.
    EmptyCart,
}

/// Owner of the cart entry sequence.
///
/// Construct one per cart; there is no process-wide instance. Tests build
/// independent stores over [`MemoryStorage`](crate::storage::MemoryStorage),
/// the CLI builds one over the configured slot file.
pub struct CartStore {
    entries: Vec<CartEntry>,
    storage: Box<dyn CartStorage>,
    sink: Box<dyn EventSink>,
}

impl CartStore {
    /// Create a store hydrated from the given slot.
    ///
    /// A slot that is absent, unreadable, malformed, or in violation of the
    /// cart constraints yields an empty cart; the problem is logged and the
    /// customer keeps a working cart.
    pub fn open(storage: Box<dyn CartStorage>, sink: Box<dyn EventSink>) -> Self {
        let entries = match storage.load() {
            Ok(stored) => sanitize(stored).unwrap_or_else(|| {
                tracing::warn!("saved cart violates cart constraints, starting empty");
                Vec::new()
            }),
            Err(e) => {
                tracing::warn!(error = %e, "could not load saved cart, starting empty");
                Vec::new()
            }
        };
        Self {
            entries,
            storage,
            sink,
        }
    }

    /// Add an item or service to the cart.
    ///
    /// A request matching an existing `(name, kind)` identity merges into
    /// that line: its quantity grows by 1 and its price, category, and
    /// provider keep their first-add values. Anything else appends a new
    /// line with quantity 1 at the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidEntry`] for an empty name, a negative
    /// price, a service without a provider, or an item with one. The cart is
    /// unchanged on error.
    pub fn add(&mut self, request: NewEntry) -> Result<&CartEntry> {
        request.validate()?;
        let identity = request.identity();

        match self.entries.iter_mut().find(|e| e.matches(&identity)) {
            Some(line) => line.quantity += 1,
            None => self.entries.push(request.into_entry()?),
        }

        self.persist();
        self.sink
            .notify(&format!("Added {identity} to cart!"), Severity::Success);

        self.entries
            .iter()
            .find(|e| e.matches(&identity))
            .ok_or(CartError::NotFound(identity))
    }

    /// Adjust a line's quantity by `delta` (positive or negative).
    ///
    /// A resulting quantity of zero or below removes the line entirely;
    /// lines are never kept at zero. A `delta` of zero still requires the
    /// line to exist but changes nothing and saves nothing. No notification
    /// is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] when no line matches the identity.
    pub fn change_quantity(&mut self, identity: &EntryIdentity, delta: i64) -> Result<()> {
        let line = self
            .entries
            .iter_mut()
            .find(|e| e.matches(identity))
            .ok_or_else(|| CartError::NotFound(identity.clone()))?;

        if delta == 0 {
            return Ok(());
        }

        let updated = i64::from(line.quantity).saturating_add(delta);
        if updated >= 1 {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        } else {
            self.entries.retain(|e| !e.matches(identity));
        }

        self.persist();
        Ok(())
    }

    /// Remove a line from the cart, preserving the order of the rest.
    ///
    /// No notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] when no line matches the identity.
    pub fn remove(&mut self, identity: &EntryIdentity) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| !e.matches(identity));
        if self.entries.len() == before {
            return Err(CartError::NotFound(identity.clone()));
        }

        self.persist();
        Ok(())
    }

    /// Empty the cart without checking out.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Check out the cart.
    ///
    /// On a non-empty cart: captures a [`Receipt`] with the grand total and
    /// the purchased lines, clears the cart, saves the cleared state, and
    /// announces the paid total. On an empty cart: mutates nothing and
    /// announces the empty-cart outcome.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.entries.is_empty() {
            self.sink
                .notify("Your cart is empty", Severity::Error);
            return CheckoutOutcome::EmptyCart;
        }

        let receipt = Receipt::capture(std::mem::take(&mut self.entries));
        self.persist();
        self.sink.notify(
            &format!(
                "Order {} placed, total {}",
                receipt.order_number,
                marigold_core::format_rand(receipt.total)
            ),
            Severity::Success,
        );
        CheckoutOutcome::Completed(receipt)
    }

    /// Grand total, recomputed from the entries.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_subtotal).sum()
    }

    /// Total units across all lines, recomputed from the entries.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Read-only view of the entry sequence, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.entries) {
            tracing::warn!(error = %e, "failed to save cart, in-memory cart stays authoritative");
        }
    }
}

/// Accept stored entries only if they satisfy every cart constraint.
fn sanitize(entries: Vec<CartEntry>) -> Option<Vec<CartEntry>> {
    let mut seen = HashSet::new();
    for entry in &entries {
        if entry.validate().is_err() || !seen.insert(entry.identity()) {
            return None;
        }
    }
    Some(entries)
}
