//! # User Management Tasks

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::UserPayload;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime;
use crate::utils::validation;

/// Fetch the user list.
pub(crate) fn fetch_users(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.users.loading {
            return;
        }
        state.users.loading = true;
        state.users.error = None;
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        state.write().users.loading = false;
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .list_users()
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx.send(AppEvent::UsersLoaded(result)).await;
    });
}

/// Validate the user dialog and submit a create or update.
///
/// A password is required when creating; on edit an empty password
/// field keeps the stored one.
pub(crate) fn save_user(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, editing_id, payload) = {
        let mut state = state.write();
        let Some(dialog) = state.users.dialog.as_mut() else {
            return;
        };
        if dialog.saving {
            return;
        }

        let username = dialog.username.trim().to_string();
        let required = validation::validate_required("Username", &username);
        if !required.is_valid {
            dialog.error = required.error;
            return;
        }

        let password = dialog.password.trim().to_string();
        if dialog.editing_id.is_none() && password.is_empty() {
            dialog.error = Some("Password is required".to_string());
            return;
        }

        let payload = UserPayload {
            username,
            password: (!password.is_empty()).then_some(password),
            role: dialog.role,
        };

        dialog.saving = true;
        dialog.error = None;
        let editing_id = dialog.editing_id;
        (state.api_client.clone(), editing_id, payload)
    };

    let Some(api_client) = api_client else {
        return;
    };

    runtime::spawn(async move {
        let result = match editing_id {
            Some(id) => api_client.update_user(id, payload).await,
            None => api_client.create_user(payload).await,
        };
        let _ = event_tx
            .send(AppEvent::UserSaved(result.map_err(|error| error.to_string())))
            .await;
    });
}

/// Delete a user.
pub(crate) fn delete_user(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    user_id: i64,
) {
    let api_client = state.read().api_client.clone();

    if let Some(api_client) = api_client {
        runtime::spawn(async move {
            let result = api_client
                .delete_user(user_id)
                .await
                .map(|_| user_id)
                .map_err(|error| error.to_string());
            let _ = event_tx.send(AppEvent::UserDeleted(result)).await;
        });
    }
}
