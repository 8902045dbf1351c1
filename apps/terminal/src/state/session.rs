//! # Session State
//!
//! The logged-in user and the active view. Authentication is a demo
//! stub: two fixed accounts sharing one password, checked by plain
//! string comparison. Roles gate which views a session may open -
//! nothing more.

use serde::{Deserialize, Serialize};

use isoko_core::{Role, User};

/// The shared demo password. Not a security mechanism.
pub const DEMO_PASSWORD: &str = "password";

/// The two fixed demo accounts.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            email: "admin@supermarket.rw".to_string(),
        },
        User {
            id: "2".to_string(),
            name: "Cashier User".to_string(),
            role: Role::Cashier,
            email: "cashier@supermarket.rw".to_string(),
        },
    ]
}

/// Checks an email/password pair against the demo accounts.
pub fn authenticate(email: &str, password: &str) -> Option<User> {
    if password != DEMO_PASSWORD {
        return None;
    }
    demo_users().into_iter().find(|u| u.email == email)
}

// =============================================================================
// Views
// =============================================================================

/// The five navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    PointOfSale,
    Products,
    Inventory,
    Reports,
}

impl View {
    /// All views, in sidebar order.
    pub fn all() -> [View; 5] {
        [
            View::Dashboard,
            View::PointOfSale,
            View::Products,
            View::Inventory,
            View::Reports,
        ]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::PointOfSale => "Point of Sale",
            View::Products => "Products",
            View::Inventory => "Inventory",
            View::Reports => "Reports",
        }
    }

    /// Command-line keyword for the view.
    pub fn key(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::PointOfSale => "pos",
            View::Products => "products",
            View::Inventory => "inventory",
            View::Reports => "reports",
        }
    }

    /// Checks whether a role may open this view.
    ///
    /// Admin sees all five; cashier sees dashboard, point of sale and
    /// inventory only.
    pub fn visible_to(&self, role: Role) -> bool {
        match self {
            View::Dashboard | View::PointOfSale | View::Inventory => true,
            View::Products | View::Reports => role == Role::Admin,
        }
    }

    /// The views a role may open, in sidebar order.
    pub fn menu_for(role: Role) -> Vec<View> {
        View::all().into_iter().filter(|v| v.visible_to(role)).collect()
    }
}

// =============================================================================
// Session
// =============================================================================

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in user.
    pub user: User,

    /// The view the operator is currently on.
    pub active_view: View,
}

impl Session {
    /// Opens a session on the dashboard.
    pub fn new(user: User) -> Self {
        Session {
            user,
            active_view: View::Dashboard,
        }
    }

    /// Checks whether this session's role may open a view.
    pub fn can_access(&self, view: View) -> bool {
        view.visible_to(self.user.role)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_demo_accounts() {
        let admin = authenticate("admin@supermarket.rw", "password").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.name, "Admin User");

        let cashier = authenticate("cashier@supermarket.rw", "password").unwrap();
        assert_eq!(cashier.role, Role::Cashier);
    }

    #[test]
    fn test_authenticate_rejections() {
        assert!(authenticate("admin@supermarket.rw", "wrong").is_none());
        assert!(authenticate("nobody@supermarket.rw", "password").is_none());
        assert!(authenticate("", "").is_none());
    }

    #[test]
    fn test_view_gating() {
        assert_eq!(View::menu_for(Role::Admin).len(), 5);

        let cashier_menu = View::menu_for(Role::Cashier);
        assert_eq!(
            cashier_menu,
            vec![View::Dashboard, View::PointOfSale, View::Inventory]
        );
        assert!(!View::Products.visible_to(Role::Cashier));
        assert!(!View::Reports.visible_to(Role::Cashier));
    }

    #[test]
    fn test_session_starts_on_dashboard() {
        let session = Session::new(demo_users().remove(1));
        assert_eq!(session.active_view, View::Dashboard);
        assert!(session.can_access(View::PointOfSale));
        assert!(!session.can_access(View::Reports));
    }
}
