//! # Auth Commands
//!
//! Demo login/logout. The check is a plain comparison against two fixed
//! accounts - a stub, deliberately kept free of anything resembling
//! real credential handling.

use tracing::{debug, info};

use isoko_core::User;

use crate::error::ApiError;
use crate::state::{authenticate, AppState, Session};

/// Logs in against the demo accounts and opens a session on the
/// dashboard.
pub fn login(state: &mut AppState, email: &str, password: &str) -> Result<User, ApiError> {
    debug!(email = %email, "login command");

    let user = authenticate(email.trim(), password).ok_or_else(ApiError::invalid_credentials)?;

    info!(user = %user.name, role = %user.role, "Login successful");
    state.session = Some(Session::new(user.clone()));
    Ok(user)
}

/// Closes the session and returns to the login screen. The next login
/// starts back on the dashboard.
pub fn logout(state: &mut AppState) -> Option<User> {
    let user = state.session.take().map(|s| s.user);
    if let Some(user) = &user {
        info!(user = %user.name, "Logged out");
    }
    user
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ErrorCode;
    use crate::state::View;
    use isoko_core::Role;
    use isoko_store::Store;

    fn app_state() -> AppState {
        AppState::new(Config::default(), Store::new())
    }

    #[test]
    fn test_login_success() {
        let mut state = app_state();
        let user = login(&mut state, "cashier@supermarket.rw", "password").unwrap();

        assert_eq!(user.role, Role::Cashier);
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.active_view, View::Dashboard);
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let mut state = app_state();

        let err = login(&mut state, "admin@supermarket.rw", "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert!(state.session.is_none());

        let err = login(&mut state, "ghost@supermarket.rw", "password").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
    }

    #[test]
    fn test_logout() {
        let mut state = app_state();
        login(&mut state, "admin@supermarket.rw", "password").unwrap();

        let user = logout(&mut state).unwrap();
        assert_eq!(user.name, "Admin User");
        assert!(state.session.is_none());
        assert!(logout(&mut state).is_none());
    }
}
