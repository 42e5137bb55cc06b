//! Cart error taxonomy.
//!
//! Only two conditions reject a mutation: a malformed add request and a
//! mutation addressing an identity the cart does not hold. Persistence
//! failures are logged and never fail a mutation, and checking out an empty
//! cart is a reported outcome rather than an error (see
//! [`CheckoutOutcome`](crate::store::CheckoutOutcome)).

use marigold_core::{EntryError, EntryIdentity};
use thiserror::Error;

/// Errors returned by cart store operations.
///
/// A failed operation leaves the cart untouched; partial mutations do not
/// happen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The add request violates the entry constraints.
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] EntryError),

    /// No cart line exists for the given identity.
    #[error("no cart line for {0}")]
    NotFound(EntryIdentity),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;
    use marigold_core::EntryKind;

    #[test]
    fn test_error_display() {
        let err = CartError::NotFound(EntryIdentity::new("Mug", EntryKind::Item));
        assert_eq!(err.to_string(), "no cart line for Mug (item)");

        let err = CartError::InvalidEntry(EntryError::EmptyName);
        assert_eq!(err.to_string(), "invalid entry: entry name cannot be empty");
    }
}
