//! # Route Guard
//!
//! Pure access-control decisions for screen navigation. The guard never
//! performs I/O; callers apply the decision (render, wait, or bounce to
//! the login screen).

use super::SessionState;

/// Access requirement of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Anyone may open the screen.
    Open,
    /// Any authenticated identity may open the screen.
    Authenticated,
    /// Only administrators may open the screen.
    AdminOnly,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the screen.
    Allow,
    /// Session restore is still in flight; show a placeholder, decide later.
    Defer,
    /// Identity is missing or insufficient; go to the login screen.
    RedirectToLogin,
}

/// Decide whether the current session may open a screen with the given
/// access level.
///
/// While the persisted session is still being restored, protected
/// screens defer instead of redirecting, so a valid restored session is
/// never bounced to login on startup.
pub fn decide(session: &SessionState, level: AccessLevel) -> Decision {
    match level {
        AccessLevel::Open => Decision::Allow,
        AccessLevel::Authenticated | AccessLevel::AdminOnly if session.bootstrapping => {
            Decision::Defer
        }
        AccessLevel::Authenticated => {
            if session.is_authenticated() {
                Decision::Allow
            } else {
                Decision::RedirectToLogin
            }
        }
        AccessLevel::AdminOnly => {
            if session.is_admin() {
                Decision::Allow
            } else {
                Decision::RedirectToLogin
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Role, UserInfo};

    fn session_with(role: Option<Role>) -> SessionState {
        SessionState {
            identity: role.map(|role| UserInfo {
                id: 1,
                username: "alice".to_string(),
                role,
            }),
            ..SessionState::default()
        }
    }

    #[test]
    fn test_open_screens_always_allowed() {
        assert_eq!(decide(&session_with(None), AccessLevel::Open), Decision::Allow);

        let mut bootstrapping = session_with(None);
        bootstrapping.bootstrapping = true;
        assert_eq!(decide(&bootstrapping, AccessLevel::Open), Decision::Allow);
    }

    #[test]
    fn test_anonymous_redirected_from_protected_screens() {
        let session = session_with(None);
        assert_eq!(
            decide(&session, AccessLevel::Authenticated),
            Decision::RedirectToLogin
        );
        assert_eq!(
            decide(&session, AccessLevel::AdminOnly),
            Decision::RedirectToLogin
        );
    }

    #[test]
    fn test_employee_allowed_on_authenticated_but_not_admin_screens() {
        let session = session_with(Some(Role::Employee));
        assert_eq!(decide(&session, AccessLevel::Authenticated), Decision::Allow);
        assert_eq!(
            decide(&session, AccessLevel::AdminOnly),
            Decision::RedirectToLogin
        );
    }

    #[test]
    fn test_admin_allowed_everywhere() {
        let session = session_with(Some(Role::Admin));
        assert_eq!(decide(&session, AccessLevel::Authenticated), Decision::Allow);
        assert_eq!(decide(&session, AccessLevel::AdminOnly), Decision::Allow);
    }

    #[test]
    fn test_bootstrap_defers_instead_of_redirecting() {
        let mut session = session_with(None);
        session.bootstrapping = true;
        assert_eq!(decide(&session, AccessLevel::Authenticated), Decision::Defer);
        assert_eq!(decide(&session, AccessLevel::AdminOnly), Decision::Defer);
    }
}
