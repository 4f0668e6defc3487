//! # Navigation Handlers
//!
//! Screen changes, guarded by the session's access level. Opening a
//! screen also triggers the data loads that screen depends on.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;
use crate::session::guard::{self, Decision};

/// Handle a navigation request.
///
/// An authenticated identity asking for the login screen is sent to its
/// home screen instead. Requests denied by the guard bounce to login;
/// requests during session restore are dropped and retried by the
/// caller on a later frame.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    requested: Screen,
) {
    let (decision, target) = {
        let state = state.read();
        let target = if requested == Screen::Login && state.is_authenticated() {
            state.home_screen()
        } else {
            requested
        };
        (guard::decide(&state.session, target.access_level()), target)
    };

    match decision {
        Decision::Allow => {
            {
                let mut state = state.write();
                if state.current_screen == target {
                    return;
                }
                state.current_screen = target;
            }
            tracing::debug!(screen = ?target, "Screen changed");
            trigger_screen_loads(state, event_tx, target);
        }
        Decision::Defer => {}
        Decision::RedirectToLogin => {
            tracing::info!(screen = ?target, "Access denied, redirecting to login");
            state.write().current_screen = Screen::Login;
        }
    }
}

/// Start the fetches a screen needs when it is opened.
pub(crate) fn trigger_screen_loads(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    match screen {
        Screen::Login => {}
        Screen::Dashboard => tasks::sales::fetch_summary(state, event_tx),
        Screen::Register => tasks::products::fetch_register_products(state, event_tx),
        Screen::Products => {
            tasks::products::fetch_admin_products(state.clone(), event_tx.clone());
            tasks::categories::fetch_categories(state, event_tx);
        }
        Screen::Categories => tasks::categories::fetch_categories(state, event_tx),
        Screen::Users => tasks::users::fetch_users(state, event_tx),
        Screen::Sales => {
            let page = state.read().sales.page;
            tasks::sales::fetch_sales(state, event_tx, page);
        }
    }
}
