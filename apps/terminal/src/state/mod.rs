//! # State Module
//!
//! Application state for the terminal session. One process, one
//! operator, one logical actor: the loop reacts to one command at a
//! time, so the state is a plain owned struct handed to the command
//! layer as `&mut AppState` - no locking, no shared ownership.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         AppState                                    │
//! │                                                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐   │
//! │  │    Store     │  │     Cart     │  │   Option<Session>        │   │
//! │  │              │  │              │  │                          │   │
//! │  │  catalog +   │  │  in-progress │  │  user + active view      │   │
//! │  │  sale log    │  │  transaction │  │  (None = login screen)   │   │
//! │  └──────────────┘  └──────────────┘  └──────────────────────────┘   │
//! │                                                                     │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │  Config (store name, VAT rate) - read-only after startup     │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod session;

pub use session::{authenticate, demo_users, Session, View, DEMO_PASSWORD};

use isoko_core::Cart;
use isoko_store::Store;

use crate::config::Config;

/// Everything the running session owns.
#[derive(Debug)]
pub struct AppState {
    /// Read-only configuration.
    pub config: Config,

    /// Catalog and sale log.
    pub store: Store,

    /// The in-progress transaction; cleared on commit.
    pub cart: Cart,

    /// `None` until login succeeds; `None` again after logout.
    pub session: Option<Session>,
}

impl AppState {
    /// Creates application state around a (typically pre-seeded) store.
    pub fn new(config: Config, store: Store) -> Self {
        AppState {
            config,
            store,
            cart: Cart::new(),
            session: None,
        }
    }
}
