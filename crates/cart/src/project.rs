//! Pure projection of cart state into display data.
//!
//! [`project`] is the only path from cart state to screen: it turns a
//! read-only snapshot into a [`DisplayModel`] and never mutates anything.
//! The same snapshot always yields the same model, so the UI can re-project
//! after every mutation without caring which operation ran.

use marigold_core::{CartEntry, EntryKind, format_rand};

/// One display-ready cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    /// Row label: the entry name, with a `By: {provider}` attribution
    /// suffix for services.
    pub label: String,
    /// Units of this line.
    pub quantity: u32,
    /// Formatted line subtotal, e.g. `R 300.00`.
    pub line_subtotal: String,
}

/// Display-ready view of the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    /// Rows in cart order.
    pub lines: Vec<DisplayLine>,
    /// Formatted grand total, e.g. `R 350.00`.
    pub grand_total: String,
    /// Total units across all lines.
    pub item_count: u64,
}

impl DisplayModel {
    /// Whether there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Project a cart snapshot into a [`DisplayModel`].
///
/// Amounts are rounded to two decimal places, half-up, once at display: the
/// grand total is the exact sum of the unrounded line subtotals, so it always
/// agrees with the store's own total.
#[must_use]
pub fn project(entries: &[CartEntry]) -> DisplayModel {
    let lines = entries
        .iter()
        .map(|entry| DisplayLine {
            label: label_for(entry),
            quantity: entry.quantity,
            line_subtotal: format_rand(entry.line_subtotal()),
        })
        .collect();

    let grand_total = entries.iter().map(CartEntry::line_subtotal).sum();

    DisplayModel {
        lines,
        grand_total: format_rand(grand_total),
        item_count: entries.iter().map(|e| u64::from(e.quantity)).sum(),
    }
}

fn label_for(entry: &CartEntry) -> String {
    match (entry.kind, entry.provider.as_deref()) {
        (EntryKind::Service, Some(provider)) => format!("{} - By: {provider}", entry.name),
        _ => entry.name.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use marigold_core::NewEntry;
    use rust_decimal::Decimal;

    fn entries() -> Vec<CartEntry> {
        let mut haircut = NewEntry::service("Haircut", Decimal::new(15000, 2), "Hair", "Jane")
            .into_entry()
            .unwrap();
        haircut.quantity = 2;
        let mug = NewEntry::item("Mug", Decimal::new(5000, 2), "Kitchen")
            .into_entry()
            .unwrap();
        vec![haircut, mug]
    }

    #[test]
    fn test_projection_rows_and_totals() {
        let model = project(&entries());

        assert_eq!(model.lines.len(), 2);
        assert_eq!(model.item_count, 3);
        assert_eq!(model.grand_total, "R 350.00");

        let haircut = model.lines.first().unwrap();
        assert_eq!(haircut.label, "Haircut - By: Jane");
        assert_eq!(haircut.quantity, 2);
        assert_eq!(haircut.line_subtotal, "R 300.00");

        let mug = model.lines.get(1).unwrap();
        assert_eq!(mug.label, "Mug");
        assert_eq!(mug.line_subtotal, "R 50.00");
    }

    #[test]
    fn test_empty_cart_projects_empty_model() {
        let model = project(&[]);
        assert!(model.is_empty());
        assert_eq!(model.grand_total, "R 0.00");
        assert_eq!(model.item_count, 0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let entries = entries();
        assert_eq!(project(&entries), project(&entries));
    }

    #[test]
    fn test_subtotals_round_half_up() {
        let entry = NewEntry::item("Trim bundle", Decimal::new(335, 3), "Promo")
            .into_entry()
            .unwrap();
        let model = project(&[entry]);
        assert_eq!(model.lines.first().unwrap().line_subtotal, "R 0.34");
        assert_eq!(model.grand_total, "R 0.34");
    }

    #[test]
    fn test_grand_total_rounds_the_exact_sum_once() {
        // Two sub-cent lines: each row displays R 0.34, but the grand total
        // comes from the exact sum 0.67, not from the rounded rows
        let sticker = NewEntry::item("Sticker", Decimal::new(335, 3), "Promo")
            .into_entry()
            .unwrap();
        let ribbon = NewEntry::item("Ribbon", Decimal::new(335, 3), "Promo")
            .into_entry()
            .unwrap();

        let model = project(&[sticker, ribbon]);
        assert!(
            model
                .lines
                .iter()
                .all(|line| line.line_subtotal == "R 0.34")
        );
        assert_eq!(model.grand_total, "R 0.67");
    }
}
