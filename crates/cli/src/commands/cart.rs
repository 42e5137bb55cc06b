//! Cart and catalog commands.
//!
//! These are the storefront's UI controller: each command drives one cart
//! store operation and re-renders from a fresh snapshot. The store is the
//! single source of truth; nothing here touches cart entries directly.

use marigold_cart::{CartError, CartStore, CheckoutOutcome, project};
use marigold_core::{EntryIdentity, EntryKind, format_rand};
use thiserror::Error;

use crate::catalog;

/// Errors that can occur while handling a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The named product does not exist in the catalog.
    #[error("'{0}' is not in the catalog")]
    UnknownProduct(String),

    /// The name matches both an item and a service.
    #[error("'{0}' names both an item and a service, pass --kind to choose")]
    AmbiguousProduct(String),

    /// The cart store rejected the operation.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Print the catalog, optionally narrowed by substring and category.
#[allow(clippy::print_stdout)]
pub fn list(filter: Option<&str>, category: Option<&str>) {
    let mut any = false;
    for entry in catalog::browse(filter, category) {
        any = true;
        let attribution = entry
            .provider
            .map(|p| format!(" - By: {p}"))
            .unwrap_or_default();
        println!(
            "{:<16} {:<8} {:<9} {}{attribution}",
            entry.name,
            entry.kind.label(),
            format_rand(entry.unit_price()),
            entry.category,
        );
    }
    if !any {
        println!("Nothing in the catalog matches");
    }
}

/// Add a catalog product to the cart by name.
///
/// # Errors
///
/// Returns [`CommandError::UnknownProduct`] when the name is not in the
/// catalog, [`CommandError::AmbiguousProduct`] when it names both an item
/// and a service and no kind was given, or the store's rejection.
pub fn add(store: &mut CartStore, name: &str, kind: Option<EntryKind>) -> Result<(), CommandError> {
    let matches = catalog::find(name, kind);
    let entry = match matches.as_slice() {
        [] => return Err(CommandError::UnknownProduct(name.to_owned())),
        [entry] => entry,
        _ => return Err(CommandError::AmbiguousProduct(name.to_owned())),
    };
    store.add(entry.to_request())?;
    Ok(())
}

/// Adjust a cart line's quantity by `delta`.
///
/// # Errors
///
/// Returns the store's rejection when the line does not exist.
pub fn change_quantity(
    store: &mut CartStore,
    name: &str,
    kind: EntryKind,
    delta: i64,
) -> Result<(), CommandError> {
    store.change_quantity(&EntryIdentity::new(name, kind), delta)?;
    Ok(())
}

/// Remove a cart line.
///
/// # Errors
///
/// Returns the store's rejection when the line does not exist.
pub fn remove(store: &mut CartStore, name: &str, kind: EntryKind) -> Result<(), CommandError> {
    store.remove(&EntryIdentity::new(name, kind))?;
    Ok(())
}

/// Render the cart from a fresh snapshot.
#[allow(clippy::print_stdout)]
pub fn show(store: &CartStore) {
    let model = project(store.snapshot());
    if model.is_empty() {
        println!("No items added to cart yet");
        return;
    }
    for line in &model.lines {
        println!("{:<28} x{:<4} {}", line.label, line.quantity, line.line_subtotal);
    }
    println!("Total: {} ({} items)", model.grand_total, model.item_count);
}

/// Check out the cart and print the receipt.
#[allow(clippy::print_stdout)]
pub fn checkout(store: &mut CartStore) {
    match store.checkout() {
        CheckoutOutcome::Completed(receipt) => {
            println!("Order {}", receipt.order_number);
            for line in &project(&receipt.entries).lines {
                println!("  {:<28} x{:<4} {}", line.label, line.quantity, line.line_subtotal);
            }
            println!("Total paid: {}", format_rand(receipt.total));
        }
        CheckoutOutcome::EmptyCart => println!("No items in cart"),
    }
}

/// Empty the cart.
pub fn clear(store: &mut CartStore) {
    store.clear();
}
