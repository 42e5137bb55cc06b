//! Cart entry data model.
//!
//! A cart is an ordered sequence of [`CartEntry`] values keyed by
//! [`EntryIdentity`] - the `(name, kind)` pair. Two entries with the same name
//! but different kinds (say, a "Polish" item and a "Polish" service) are
//! distinct lines. Identity uniqueness is enforced by the store at insertion
//! time, never as an after-the-fact dedup pass.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a cart entry is a physical catalog item or a booked service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A physical catalog item.
    Item,
    /// A service rendered by a named provider.
    Service,
}

impl EntryKind {
    /// Lowercase label for user-facing messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The `(name, kind)` pair that identifies a cart line.
///
/// Add requests with an identity already present in the cart merge into the
/// existing line; mutations (quantity change, removal) address lines by
/// identity rather than by position, so a stale row index can never delete
/// the wrong line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryIdentity {
    /// Catalog name of the item or service.
    pub name: String,
    /// Item or service.
    pub kind: EntryKind,
}

impl EntryIdentity {
    /// Create an identity from a name and kind.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for EntryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Errors that make an entry (or add request) invalid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The entry name is empty or whitespace.
    #[error("entry name cannot be empty")]
    EmptyName,
    /// The unit price is below zero.
    #[error("unit price cannot be negative")]
    NegativePrice,
    /// A service entry is missing its provider.
    #[error("service entries require a non-empty provider")]
    MissingProvider,
    /// An item entry carries a provider.
    #[error("item entries cannot carry a provider")]
    UnexpectedProvider,
    /// The quantity is zero (only possible in stored data).
    #[error("entry quantity must be at least 1")]
    ZeroQuantity,
}

/// One line in the cart.
///
/// The unit price is frozen at the time of the first add: later catalog price
/// changes (or later add requests quoting a different price) never touch an
/// existing line. Serialized field names match the persisted slot format:
/// `{name, kind, unitPrice, category, provider?, quantity}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Catalog name, part of the identity.
    pub name: String,
    /// Item or service, part of the identity.
    pub kind: EntryKind,
    /// Price per unit, frozen at first add.
    pub unit_price: Decimal,
    /// Descriptive category, no invariant.
    pub category: String,
    /// Rendering provider; present exactly when `kind` is [`EntryKind::Service`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Units of this line, at least 1 while the entry exists.
    pub quantity: u32,
}

impl CartEntry {
    /// The identity key of this line.
    #[must_use]
    pub fn identity(&self) -> EntryIdentity {
        EntryIdentity::new(self.name.clone(), self.kind)
    }

    /// Whether this line matches the given identity.
    #[must_use]
    pub fn matches(&self, identity: &EntryIdentity) -> bool {
        self.kind == identity.kind && self.name == identity.name
    }

    /// Line subtotal: unit price times quantity, unrounded.
    #[must_use]
    pub fn line_subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Check the entry against the data-model constraints.
    ///
    /// Used when hydrating stored data, where any shape of record can appear.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: empty name, negative price,
    /// provider missing on a service or present on an item, or zero quantity.
    pub fn validate(&self) -> Result<(), EntryError> {
        validate_fields(&self.name, self.kind, self.unit_price, self.provider.as_deref())?;
        if self.quantity == 0 {
            return Err(EntryError::ZeroQuantity);
        }
        Ok(())
    }
}

/// An add request: everything a [`CartEntry`] has except the quantity, which
/// always starts at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    /// Catalog name of the item or service.
    pub name: String,
    /// Item or service.
    pub kind: EntryKind,
    /// Quoted price per unit.
    pub unit_price: Decimal,
    /// Descriptive category.
    pub category: String,
    /// Rendering provider, required for services.
    pub provider: Option<String>,
}

impl NewEntry {
    /// Build an add request for a catalog item.
    pub fn item(
        name: impl Into<String>,
        unit_price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Item,
            unit_price,
            category: category.into(),
            provider: None,
        }
    }

    /// Build an add request for a service rendered by `provider`.
    pub fn service(
        name: impl Into<String>,
        unit_price: Decimal,
        category: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Service,
            unit_price,
            category: category.into(),
            provider: Some(provider.into()),
        }
    }

    /// The identity key this request would merge into.
    #[must_use]
    pub fn identity(&self) -> EntryIdentity {
        EntryIdentity::new(self.name.clone(), self.kind)
    }

    /// Validate the request without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] for an empty name, a negative price, a service
    /// without a provider, or an item with one.
    pub fn validate(&self) -> Result<(), EntryError> {
        validate_fields(&self.name, self.kind, self.unit_price, self.provider.as_deref())
    }

    /// Validate and convert into a fresh cart line with quantity 1.
    ///
    /// # Errors
    ///
    /// Same conditions as [`NewEntry::validate`].
    pub fn into_entry(self) -> Result<CartEntry, EntryError> {
        self.validate()?;
        Ok(CartEntry {
            name: self.name,
            kind: self.kind,
            unit_price: self.unit_price,
            category: self.category,
            provider: self.provider,
            quantity: 1,
        })
    }
}

fn validate_fields(
    name: &str,
    kind: EntryKind,
    unit_price: Decimal,
    provider: Option<&str>,
) -> Result<(), EntryError> {
    if name.trim().is_empty() {
        return Err(EntryError::EmptyName);
    }
    if unit_price.is_sign_negative() && !unit_price.is_zero() {
        return Err(EntryError::NegativePrice);
    }
    match (kind, provider) {
        (EntryKind::Service, None) => Err(EntryError::MissingProvider),
        (EntryKind::Service, Some(p)) if p.trim().is_empty() => Err(EntryError::MissingProvider),
        (EntryKind::Item, Some(_)) => Err(EntryError::UnexpectedProvider),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_item_request_valid() {
        let entry = NewEntry::item("Mug", price(5000), "Kitchen")
            .into_entry()
            .unwrap();
        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.provider, None);
        assert_eq!(entry.line_subtotal(), price(5000));
    }

    #[test]
    fn test_service_request_requires_provider() {
        let mut req = NewEntry::service("Haircut", price(15000), "Hair", "Jane");
        assert!(req.validate().is_ok());

        req.provider = Some("   ".to_string());
        assert_eq!(req.validate(), Err(EntryError::MissingProvider));

        req.provider = None;
        assert_eq!(req.validate(), Err(EntryError::MissingProvider));
    }

    #[test]
    fn test_item_request_rejects_provider() {
        let mut req = NewEntry::item("Mug", price(5000), "Kitchen");
        req.provider = Some("Jane".to_string());
        assert_eq!(req.validate(), Err(EntryError::UnexpectedProvider));
    }

    #[test]
    fn test_empty_name_rejected() {
        let req = NewEntry::item("  ", price(5000), "Kitchen");
        assert_eq!(req.validate(), Err(EntryError::EmptyName));
    }

    #[test]
    fn test_negative_price_rejected() {
        let req = NewEntry::item("Mug", price(-1), "Kitchen");
        assert_eq!(req.validate(), Err(EntryError::NegativePrice));
    }

    #[test]
    fn test_zero_price_allowed() {
        let req = NewEntry::item("Sample", Decimal::ZERO, "Promo");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_identity_distinguishes_kind() {
        let item = EntryIdentity::new("Polish", EntryKind::Item);
        let service = EntryIdentity::new("Polish", EntryKind::Service);
        assert_ne!(item, service);
        assert_eq!(service.to_string(), "Polish (service)");
    }

    #[test]
    fn test_stored_entry_validation() {
        let mut entry = NewEntry::item("Mug", price(5000), "Kitchen")
            .into_entry()
            .unwrap();
        assert!(entry.validate().is_ok());

        entry.quantity = 0;
        assert_eq!(entry.validate(), Err(EntryError::ZeroQuantity));
    }

    #[test]
    fn test_line_subtotal_scales_with_quantity() {
        let mut entry = NewEntry::service("Haircut", price(15000), "Hair", "Jane")
            .into_entry()
            .unwrap();
        entry.quantity = 3;
        assert_eq!(entry.line_subtotal(), price(45000));
    }

    #[test]
    fn test_serde_slot_shape() {
        let entry = NewEntry::service("Haircut", price(15000), "Hair", "Jane")
            .into_entry()
            .unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "Haircut");
        assert_eq!(json["kind"], "service");
        assert_eq!(json["unitPrice"], "150.00");
        assert_eq!(json["provider"], "Jane");
        assert_eq!(json["quantity"], 1);

        let item = NewEntry::item("Mug", price(5000), "Kitchen")
            .into_entry()
            .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("provider").is_none());
    }
}
