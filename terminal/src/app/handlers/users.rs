//! # User Management Handlers

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, UserForm};

/// Open the dialog empty, for creating a user.
pub(crate) fn open_create_dialog(state: Arc<RwLock<AppState>>) {
    state.write().users.dialog = Some(UserForm::default());
}

/// Open the dialog pre-filled with an existing user.
pub(crate) fn open_edit_dialog(state: Arc<RwLock<AppState>>, user_id: i64) {
    let mut state = state.write();
    let Some(user) = state
        .users
        .items
        .iter()
        .find(|user| user.id == user_id)
        .cloned()
    else {
        return;
    };
    state.users.dialog = Some(UserForm::for_edit(&user));
}

/// Close the dialog, discarding edits.
pub(crate) fn close_dialog(state: Arc<RwLock<AppState>>) {
    state.write().users.dialog = None;
}
