//! # Authentication Handlers
//!
//! Login and logout actions.

use std::path::Path;
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;
use crate::session::storage;

/// Handle login button click
///
/// Empty fields are rejected locally; otherwise the login task takes
/// over and the result arrives as [`AppEvent::LoginResult`].
pub(crate) fn handle_login_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (username, password) = {
        let state = state.read();
        (
            state.login.username.trim().to_string(),
            state.login.password.clone(),
        )
    };

    if username.is_empty() || password.is_empty() {
        state
            .write()
            .session
            .reject("Username and password required".to_string());
        return;
    }

    tasks::session::login(state, event_tx, username, password);
}

/// Handle logout button click
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>, session_file: &Path) {
    let mut state = state.write();
    logout(&mut state, session_file);
    tracing::info!("Logged out");
}

/// Drop the identity and everything derived from it.
///
/// Used by explicit logout, failed revalidation and session expiry.
/// Idempotent: the persisted file may already be gone.
pub(crate) fn logout(state: &mut AppState, session_file: &Path) {
    storage::clear(session_file);
    if let Some(api_client) = state.api_client.as_ref() {
        api_client.set_token(None);
    }

    state.session.clear();
    state.register = Default::default();
    state.dashboard = Default::default();
    state.products = Default::default();
    state.categories = Default::default();
    state.users = Default::default();
    state.sales = Default::default();
    state.current_screen = Screen::Login;
}
