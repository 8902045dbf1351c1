//! # Commands Module
//!
//! Every operation the terminal loop can invoke, one module per
//! concern.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports, shared guards)
//! ├── auth.rs       ◄─── Login / logout
//! ├── product.rs    ◄─── Catalog CRUD (admin only)
//! ├── cart.rs       ◄─── Cart manipulation
//! ├── sale.rs       ◄─── Sale commit
//! ├── dashboard.rs  ◄─── Dashboard projection
//! ├── inventory.rs  ◄─── Inventory filter/sort view
//! └── report.rs     ◄─── Sales report aggregation (admin only)
//! ```
//!
//! ## Command Shape
//! A command takes `&mut AppState` (or `&AppState` for reads) plus its
//! arguments, validates, delegates to core/store, and returns a DTO the
//! renderer can print. Errors come back as `ApiError` and are shown as
//! notices; a rejected command never changes state.

pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod inventory;
pub mod product;
pub mod report;
pub mod sale;

use isoko_core::User;

use crate::error::ApiError;
use crate::state::{AppState, View};

/// Returns the logged-in user, or rejects when no session is open.
pub(crate) fn current_user(state: &AppState) -> Result<&User, ApiError> {
    state
        .session
        .as_ref()
        .map(|s| &s.user)
        .ok_or_else(|| ApiError::forbidden("this operation without logging in"))
}

/// Rejects when the session's role may not open `view`.
pub(crate) fn require_view(state: &AppState, view: View) -> Result<(), ApiError> {
    let session = state
        .session
        .as_ref()
        .ok_or_else(|| ApiError::forbidden(view.label()))?;

    if session.can_access(view) {
        Ok(())
    } else {
        Err(ApiError::forbidden(view.label()))
    }
}
