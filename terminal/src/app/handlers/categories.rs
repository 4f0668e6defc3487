//! # Category Management Handlers

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, CategoryForm};

/// Open the dialog empty, for creating a category.
pub(crate) fn open_create_dialog(state: Arc<RwLock<AppState>>) {
    state.write().categories.dialog = Some(CategoryForm::default());
}

/// Open the dialog pre-filled with an existing category.
pub(crate) fn open_edit_dialog(state: Arc<RwLock<AppState>>, category_id: i64) {
    let mut state = state.write();
    let Some(category) = state
        .categories
        .items
        .iter()
        .find(|category| category.id == category_id)
        .cloned()
    else {
        return;
    };
    state.categories.dialog = Some(CategoryForm::for_edit(&category));
}

/// Close the dialog, discarding edits.
pub(crate) fn close_dialog(state: Arc<RwLock<AppState>>) {
    state.write().categories.dialog = None;
}
