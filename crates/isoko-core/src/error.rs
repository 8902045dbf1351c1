//! # Error Types
//!
//! Domain-specific error types for isoko-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  isoko-core errors (this file)                                      │
//! │  ├── CoreError        - Cart and stock rule violations              │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  isoko-store errors (separate crate)                                │
//! │  └── StoreError       - Catalog lookups, duplicate barcodes,        │
//! │                         sale-commit rejections                      │
//! │                                                                     │
//! │  Terminal app errors                                                │
//! │  └── ApiError         - What the operator sees (code + message)     │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is a non-fatal rejection: the operation is refused
//! and prior state is left untouched.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and stock rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attempted to add a product whose stock is zero.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// Requested quantity exceeds the units currently on the shelf.
    ///
    /// ## User Workflow
    /// ```text
    /// Scan product (cart already holds 3, shelf holds 3)
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Ubwoba (Bread)", available: 3, requested: 4 }
    ///      │
    ///      ▼
    /// Notice shows: "Only 3 items available"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The product has no line in the cart.
    #[error("Product not in cart: {0}")]
    NotInCart(String),

    /// Cart has reached the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds the per-item maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when operator input does not meet requirements, before
/// any business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a non-numeric barcode).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
