//! # API Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Isoko POS                          │
//! │                                                                     │
//! │  Terminal loop                    Command layer                     │
//! │  ─────────────                    ─────────────                     │
//! │                                                                     │
//! │  "scan 3456789012345"                                               │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  commands::cart::add_to_cart                                        │
//! │         │                                                           │
//! │         ├── catalog miss ── StoreError::ProductNotFound ──┐         │
//! │         │                                                 ▼         │
//! │         ├── stock rule ──── CoreError::OutOfStock ──── ApiError     │
//! │         │                                                 │         │
//! │         ▼                                                 ▼         │
//! │  Ok(CartView) ◄──────────────────────────── printed as a notice;    │
//! │                                             state is untouched      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is non-fatal: it becomes a printed notice and the loop
//! prompts again. Nothing is retried or escalated.

use serde::Serialize;

use isoko_core::CoreError;
use isoko_store::StoreError;

/// Error returned from command functions.
///
/// Carries a machine-readable `code` plus a human-readable `message`
/// shown to the operator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (product id or barcode miss).
    NotFound,

    /// Input validation failed.
    ValidationError,

    /// Cart operation failed.
    CartError,

    /// Product has zero stock.
    OutOfStock,

    /// Requested quantity exceeds available stock.
    InsufficientStock,

    /// Commit attempted with an empty cart.
    EmptyCart,

    /// Login email/password mismatch.
    InvalidCredentials,

    /// The current role may not perform this operation.
    Forbidden,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid-credentials error with the fixed demo hint.
    pub fn invalid_credentials() -> Self {
        ApiError::new(
            ErrorCode::InvalidCredentials,
            "Invalid credentials. Use admin@supermarket.rw or cashier@supermarket.rw \
             with password 'password'",
        )
    }

    /// Creates a forbidden error.
    pub fn forbidden(what: &str) -> Self {
        ApiError::new(
            ErrorCode::Forbidden,
            format!("Your role does not allow access to {}", what),
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::OutOfStock { .. } => ErrorCode::OutOfStock,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::NotInCart(_) => ErrorCode::CartError,
            CoreError::CartTooLarge { .. } => ErrorCode::CartError,
            CoreError::QuantityTooLarge { .. } => ErrorCode::ValidationError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::ProductNotFound(_) => ErrorCode::NotFound,
            StoreError::DuplicateBarcode(_) => ErrorCode::ValidationError,
            StoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            StoreError::EmptyCart => ErrorCode::EmptyCart,
            StoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::OutOfStock {
            name: "Amata (Milk)".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(err.message, "Amata (Milk) is out of stock");

        let err: ApiError = CoreError::NotInCart("p1".to_string()).into();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::ProductNotFound("p1".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = StoreError::DuplicateBarcode("123".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_helpers() {
        let err = ApiError::not_found("Product", "3456789012345");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 3456789012345");

        assert_eq!(
            ApiError::invalid_credentials().code,
            ErrorCode::InvalidCredentials
        );
        assert_eq!(ApiError::forbidden("Reports").code, ErrorCode::Forbidden);
    }
}
