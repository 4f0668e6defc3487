//! # Category Tasks

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::CategoryPayload;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime;
use crate::utils::validation;

/// Fetch the category list.
///
/// Feeds both the category management screen and the category filter on
/// the product screen.
pub(crate) fn fetch_categories(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.categories.loading {
            return;
        }
        state.categories.loading = true;
        state.categories.error = None;
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        state.write().categories.loading = false;
        return;
    };

    runtime::spawn(async move {
        let result = api_client
            .list_categories()
            .await
            .map_err(|error| error.to_string());
        let _ = event_tx.send(AppEvent::CategoriesLoaded(result)).await;
    });
}

/// Validate the category dialog and submit a create or update.
pub(crate) fn save_category(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, editing_id, payload) = {
        let mut state = state.write();
        let Some(dialog) = state.categories.dialog.as_mut() else {
            return;
        };
        if dialog.saving {
            return;
        }

        let name = dialog.name.trim().to_string();
        let required = validation::validate_required("Name", &name);
        if !required.is_valid {
            dialog.error = required.error;
            return;
        }

        let description = dialog.description.trim();
        let payload = CategoryPayload {
            name,
            description: (!description.is_empty()).then(|| description.to_string()),
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
            Some(id) => api_client.update_category(id, payload).await,
            None => api_client.create_category(payload).await,
        };
        let _ = event_tx
            .send(AppEvent::CategorySaved(result.map_err(|error| error.to_string())))
            .await;
    });
}

/// Delete a category.
pub(crate) fn delete_category(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    category_id: i64,
) {
    let api_client = state.read().api_client.clone();

    if let Some(api_client) = api_client {
        runtime::spawn(async move {
            let result = api_client
                .delete_category(category_id)
                .await
                .map(|_| category_id)
                .map_err(|error| error.to_string());
            let _ = event_tx.send(AppEvent::CategoryDeleted(result)).await;
        });
    }
}
