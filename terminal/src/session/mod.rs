//! # Session Management
//!
//! Holds the authenticated identity, persists it across restarts and
//! decides which screens that identity may open.
//!
//! ## Lifecycle
//!
//! 1. On startup the persisted session is restored optimistically from
//!    disk ([`storage`]) and a background revalidation against the
//!    backend is started.
//! 2. A successful login replaces the identity and persists it.
//! 3. Logout, failed revalidation, or any 401 from the backend clears
//!    both the in-memory identity and the persisted file.
//!
//! Navigation decisions live in [`guard`].

pub mod guard;
pub mod storage;

use shared::UserInfo;

/// In-memory authentication state.
///
/// `last_error` is the message shown on the login form; a failed login
/// sets it without touching an already-established identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The authenticated identity, if any.
    pub identity: Option<UserInfo>,
    /// True while the persisted session is still being restored.
    pub bootstrapping: bool,
    /// True while a login request is in flight.
    pub authenticating: bool,
    /// Last login failure message, shown on the login form.
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|user| user.is_admin())
    }

    /// Install an authenticated identity and clear any stale error.
    pub fn establish(&mut self, user: UserInfo) {
        self.identity = Some(user);
        self.last_error = None;
    }

    /// Record a failed login. The current identity (if any) is untouched.
    pub fn reject(&mut self, message: String) {
        self.last_error = Some(message);
    }

    /// Drop the identity, e.g. on logout or session expiry.
    pub fn clear(&mut self) {
        self.identity = None;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: 1,
            username: "alice".to_string(),
            role,
        }
    }

    #[test]
    fn test_rejected_login_keeps_identity() {
        let mut session = SessionState::default();
        session.establish(user(Role::Admin));
        session.reject("invalid credentials".to_string());

        assert!(session.is_authenticated());
        assert_eq!(session.last_error.as_deref(), Some("invalid credentials"));
    }

    #[test]
    fn test_establish_clears_previous_error() {
        let mut session = SessionState::default();
        session.reject("invalid credentials".to_string());
        session.establish(user(Role::Employee));

        assert!(session.last_error.is_none());
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_clear_drops_identity() {
        let mut session = SessionState::default();
        session.establish(user(Role::Admin));
        session.clear();

        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }
}
