//! # Store Error Types

use isoko_core::ValidationError;
use thiserror::Error;

/// Errors raised by catalog operations and the sale commit.
///
/// Every variant is a clean rejection: the store is left exactly as it
/// was before the failed call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product with the given id (or barcode, for lookups).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Another product already carries this barcode.
    #[error("barcode '{0}' already exists")]
    DuplicateBarcode(String),

    /// A cart line asks for more units than the shelf holds.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Commit attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Field validation failed before any state was touched.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
