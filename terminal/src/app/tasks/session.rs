//! # Session Tasks
//!
//! Login and background revalidation of a restored session.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime;

/// Start a login request.
///
/// A second click while a request is in flight is ignored.
pub(crate) fn login(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    username: String,
    password: String,
) {
    let api_client = {
        let mut state = state.write();
        if state.session.authenticating {
            return;
        }
        state.session.authenticating = true;
        state.session.last_error = None;
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        let mut state = state.write();
        state.session.authenticating = false;
        state.session.reject("API client not available".to_string());
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .login(username, password)
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Revalidate a session restored from disk against the backend.
///
/// The restored identity is already usable; this runs in the background
/// and only logs the operator out if the backend disowns the token.
pub(crate) fn revalidate(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();

    if let Some(api_client) = api_client {
        runtime::spawn(async move {
            let result = api_client
                .current_user()
                .await
                .map_err(|error| error.to_string());
            let _ = event_tx.send(AppEvent::SessionRevalidated(result)).await;
        });
    }
}
