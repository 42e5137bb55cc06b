//! The built-in storefront catalog.
//!
//! A fixed list of items and services stands in for a real product backend.
//! Prices quoted here apply at the moment of adding; a line already in the
//! cart keeps its first-add price even if the catalog changes.

use marigold_core::{EntryKind, NewEntry};
use rust_decimal::Decimal;

/// One product or service offered by the storefront.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Display name, doubles as the cart identity name.
    pub name: &'static str,
    /// Item or service.
    pub kind: EntryKind,
    /// Price in rand cents.
    pub price_cents: i64,
    /// Browsing category.
    pub category: &'static str,
    /// Servicer rendering the service, for services only.
    pub provider: Option<&'static str>,
}

impl CatalogEntry {
    /// Quoted unit price.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }

    /// Build the add request for this catalog entry.
    #[must_use]
    pub fn to_request(&self) -> NewEntry {
        match self.provider {
            Some(provider) => {
                NewEntry::service(self.name, self.unit_price(), self.category, provider)
            }
            None => NewEntry::item(self.name, self.unit_price(), self.category),
        }
    }
}

/// Everything the storefront offers.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Haircut",
        kind: EntryKind::Service,
        price_cents: 15000,
        category: "Hair",
        provider: Some("Jane"),
    },
    CatalogEntry {
        name: "Beard Trim",
        kind: EntryKind::Service,
        price_cents: 8000,
        category: "Hair",
        provider: Some("Sipho"),
    },
    CatalogEntry {
        name: "Manicure",
        kind: EntryKind::Service,
        price_cents: 12000,
        category: "Nails",
        provider: Some("Thandi"),
    },
    CatalogEntry {
        name: "Polish",
        kind: EntryKind::Service,
        price_cents: 6000,
        category: "Nails",
        provider: Some("Thandi"),
    },
    CatalogEntry {
        name: "Shampoo",
        kind: EntryKind::Item,
        price_cents: 9500,
        category: "Hair",
        provider: None,
    },
    CatalogEntry {
        name: "Polish",
        kind: EntryKind::Item,
        price_cents: 2500,
        category: "Nails",
        provider: None,
    },
    CatalogEntry {
        name: "Mug",
        kind: EntryKind::Item,
        price_cents: 5000,
        category: "Kitchen",
        provider: None,
    },
    CatalogEntry {
        name: "Scented Candle",
        kind: EntryKind::Item,
        price_cents: 6500,
        category: "Home",
        provider: None,
    },
];

/// Catalog entries whose name contains `filter` (case-insensitive) and whose
/// category matches `category` (case-insensitive), when given.
pub fn browse<'a>(
    filter: Option<&'a str>,
    category: Option<&'a str>,
) -> impl Iterator<Item = &'static CatalogEntry> + 'a {
    let filter = filter.map(str::to_lowercase);
    let category = category.map(str::to_lowercase);
    CATALOG.iter().filter(move |entry| {
        filter
            .as_deref()
            .is_none_or(|f| entry.name.to_lowercase().contains(f))
            && category
                .as_deref()
                .is_none_or(|c| entry.category.to_lowercase() == c)
    })
}

/// Look up catalog entries by exact name (case-insensitive), optionally
/// narrowed to one kind.
pub fn find(name: &str, kind: Option<EntryKind>) -> Vec<&'static CatalogEntry> {
    CATALOG
        .iter()
        .filter(|entry| {
            entry.name.eq_ignore_ascii_case(name) && kind.is_none_or(|k| entry.kind == k)
        })
        .collect()
}
