//! # isoko-core: Pure Business Logic for Isoko POS
//!
//! This crate is the heart of Isoko POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Isoko POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                apps/terminal (interactive surface)          │   │
//! │  │    Login ──► View loop ──► Commands ──► Rendered tables     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                 isoko-store (state store)                   │   │
//! │  │        Catalog, sale log, atomic sale commit                │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ isoko-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────────────┐  │   │
//! │  │  │  types  │ │  money  │ │  cart   │ │ reports/inventory│  │   │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │ /dashboard views │  │   │
//! │  │  │  Sale   │ │ VatCalc │ │CartLine │ │ (projections)    │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO CLOCK READS • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, User, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The in-progress transaction and its stock-limit rules
//! - [`reports`] - Sale-log aggregation (windows, top products, ...)
//! - [`inventory`] - Catalog filter/sort and stock lists
//! - [`dashboard`] - Landing-view projection
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; `now` is a parameter
//! 2. **No I/O**: terminal, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are whole francs (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod money;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed VAT rate in basis points (1800 = 18%).
///
/// Applied to the cart subtotal at commit time; the sale record freezes
/// the computed amount.
pub const VAT_RATE_BPS: u32 = 1_800;

/// Fixed display currency (ISO 4217). All monetary output is prefixed
/// with this code and grouped, e.g. `RWF 3,500`.
pub const CURRENCY_CODE: &str = "RWF";

/// Maximum distinct line items in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in a cart line. Guards against
/// typing 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// How many sales the "Recent Sales" cards show.
pub const RECENT_SALES_LIMIT: usize = 5;
