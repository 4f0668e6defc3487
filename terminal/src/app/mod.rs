//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async
//! task handlers and application state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │              Main Thread (egui)                │
//! │  App::on_tick()    - drains the event channel  │
//! │  App::handle_*()   - user action handlers      │
//! │  ui::render()      - reads a state snapshot    │
//! └──────────────┬─────────────────────────────────┘
//!                │ async_channel (unbounded)
//! ┌──────────────▼─────────────────────────────────┐
//! │          Background Tasks (Tokio)              │
//! │  tasks::*          - REST calls via ApiClient  │
//! │  each task ends in exactly one AppEvent        │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! State lives in `Arc<RwLock<AppState>>`; locks are held for minimal
//! duration on both sides so the UI never blocks on network I/O.
//!
//! ## Session Bootstrap
//!
//! [`App::new`] restores the persisted session optimistically: a stored
//! identity is usable immediately, while a background request to the
//! backend confirms it. If the backend disowns the token the operator
//! is logged out and returned to the login screen.

mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::{AppState, Screen};

use std::path::PathBuf;
use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::services::api::ApiClient;
use crate::session::guard::{self, Decision};
use crate::session::storage;
use event_handler::AppEventHandler;

/// Main application orchestrator.
///
/// Owns the shared state, both ends of the event channel and the
/// session file location. All methods are called from the main thread.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results, polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,
    /// Channel sender cloned into every background task.
    pub(crate) event_tx: Sender<AppEvent>,
    /// Where the session is persisted.
    pub(crate) session_file: PathBuf,
}

impl App {
    /// Create the application, restoring any persisted session.
    pub fn new() -> Self {
        Self::with_session_file(storage::session_path())
    }

    /// Create the application with an explicit session file (used by tests).
    pub fn with_session_file(session_file: PathBuf) -> Self {
        let (event_tx, event_rx) = unbounded();
        let api_client = Arc::new(ApiClient::with_config(
            ApiClient::base_url_from_env(),
            session_file.clone(),
            event_tx.clone(),
        ));

        let mut state = AppState {
            current_screen: Screen::Login,
            session: Default::default(),
            login: Default::default(),
            register: Default::default(),
            dashboard: Default::default(),
            products: Default::default(),
            categories: Default::default(),
            users: Default::default(),
            sales: Default::default(),
            api_client: Some(api_client.clone()),
            pending_notifications: Vec::new(),
        };

        // Optimistic restore: the stored identity is trusted until the
        // backend says otherwise.
        state.session.bootstrapping = true;
        let restored = storage::load(&session_file);
        if let Some(stored) = &restored {
            api_client.set_token(Some(stored.token.clone()));
            state.session.establish(stored.user.clone());
            state.current_screen = state.home_screen();
        }
        state.session.bootstrapping = false;

        let restored_screen = restored.as_ref().map(|_| state.current_screen);
        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            session_file,
        };

        if let Some(screen) = restored_screen {
            tracing::info!(screen = ?screen, "Session restored, revalidating in background");
            tasks::session::revalidate(app.state.clone(), app.event_tx.clone());
            handlers::navigation::trigger_screen_loads(
                app.state.clone(),
                app.event_tx.clone(),
                screen,
            );
        } else {
            tracing::info!("No persisted session, starting at login");
        }

        app
    }

    /// Called every frame to process async events and enforce access.
    ///
    /// Drains the event channel with `try_recv()` (non-blocking) and
    /// then re-checks the route guard for the current screen, so a
    /// session that expired mid-frame bounces to login on the very next
    /// tick.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        let decision = {
            let state = self.state.read();
            guard::decide(&state.session, state.current_screen.access_level())
        };
        if decision == Decision::RedirectToLogin {
            let mut state = self.state.write();
            if state.current_screen != Screen::Login {
                tracing::info!(screen = ?state.current_screen, "Access revoked, returning to login");
                state.current_screen = Screen::Login;
            }
        }
    }

    /// Handle one async event result.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    // Auth

    pub fn handle_login_click(&mut self) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone(), &self.session_file);
    }

    // Navigation

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(
            self.state.clone(),
            self.event_tx.clone(),
            screen,
        );
    }

    // Register

    pub fn refresh_register_products(&mut self) {
        tasks::products::fetch_register_products(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_add_to_cart(&mut self, product_id: i64) {
        handlers::register::handle_add_to_cart(self.state.clone(), product_id);
    }

    pub fn handle_set_quantity(&mut self, product_id: i64, quantity: i64) {
        handlers::register::handle_set_quantity(self.state.clone(), product_id, quantity);
    }

    pub fn handle_remove_cart_line(&mut self, product_id: i64) {
        handlers::register::handle_remove_line(self.state.clone(), product_id);
    }

    pub fn handle_clear_cart(&mut self) {
        handlers::register::handle_clear_cart(self.state.clone());
    }

    pub fn handle_checkout_click(&mut self) {
        tasks::sales::submit_sale(self.state.clone(), self.event_tx.clone());
    }

    // Product management

    pub fn refresh_admin_products(&mut self) {
        tasks::products::fetch_admin_products(self.state.clone(), self.event_tx.clone());
    }

    pub fn open_product_create_dialog(&mut self) {
        handlers::products::open_create_dialog(self.state.clone());
    }

    pub fn open_product_edit_dialog(&mut self, product_id: i64) {
        handlers::products::open_edit_dialog(self.state.clone(), product_id);
    }

    pub fn close_product_dialog(&mut self) {
        handlers::products::close_dialog(self.state.clone());
    }

    pub fn handle_product_save_click(&mut self) {
        tasks::products::save_product(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_product_delete_click(&mut self, product_id: i64) {
        tasks::products::delete_product(self.state.clone(), self.event_tx.clone(), product_id);
    }

    pub fn handle_stock_apply_click(&mut self, product_id: i64) {
        handlers::products::apply_stock_edit(self.state.clone(), self.event_tx.clone(), product_id);
    }

    // Category management

    pub fn open_category_create_dialog(&mut self) {
        handlers::categories::open_create_dialog(self.state.clone());
    }

    pub fn open_category_edit_dialog(&mut self, category_id: i64) {
        handlers::categories::open_edit_dialog(self.state.clone(), category_id);
    }

    pub fn close_category_dialog(&mut self) {
        handlers::categories::close_dialog(self.state.clone());
    }

    pub fn handle_category_save_click(&mut self) {
        tasks::categories::save_category(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_category_delete_click(&mut self, category_id: i64) {
        tasks::categories::delete_category(self.state.clone(), self.event_tx.clone(), category_id);
    }

    // User management

    pub fn open_user_create_dialog(&mut self) {
        handlers::users::open_create_dialog(self.state.clone());
    }

    pub fn open_user_edit_dialog(&mut self, user_id: i64) {
        handlers::users::open_edit_dialog(self.state.clone(), user_id);
    }

    pub fn close_user_dialog(&mut self) {
        handlers::users::close_dialog(self.state.clone());
    }

    pub fn handle_user_save_click(&mut self) {
        tasks::users::save_user(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_user_delete_click(&mut self, user_id: i64) {
        tasks::users::delete_user(self.state.clone(), self.event_tx.clone(), user_id);
    }

    // Sales history and dashboard

    pub fn handle_sales_filter_apply(&mut self) {
        tasks::sales::fetch_sales(self.state.clone(), self.event_tx.clone(), 1);
    }

    pub fn handle_sales_page_change(&mut self, page: u32) {
        tasks::sales::fetch_sales(self.state.clone(), self.event_tx.clone(), page);
    }

    pub fn handle_sale_detail_click(&mut self, sale_id: i64) {
        tasks::sales::fetch_sale_detail(self.state.clone(), self.event_tx.clone(), sale_id);
    }

    pub fn close_sale_detail(&mut self) {
        self.state.write().sales.detail = None;
    }

    pub fn refresh_dashboard(&mut self) {
        tasks::sales::fetch_summary(self.state.clone(), self.event_tx.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Role, UserInfo};

    #[test]
    fn test_fresh_start_lands_on_login() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::with_session_file(dir.path().join("session.json"));

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.is_authenticated());
        assert!(!state.session.bootstrapping);
    }

    #[test]
    fn test_persisted_session_restored_optimistically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        storage::save(
            &path,
            &storage::StoredSession {
                token: "jwt-token".to_string(),
                user: UserInfo {
                    id: 1,
                    username: "alice".to_string(),
                    role: Role::Admin,
                },
            },
        )
        .unwrap();

        let app = App::with_session_file(path);

        let state = app.state.read();
        assert!(state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Dashboard);
    }

    #[test]
    fn test_corrupt_session_file_starts_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{broken").unwrap();

        let app = App::with_session_file(path);
        assert!(!app.state.read().is_authenticated());
        assert_eq!(app.state.read().current_screen, Screen::Login);
    }

    #[test]
    fn test_on_tick_bounces_revoked_access() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::with_session_file(dir.path().join("session.json"));

        {
            let mut state = app.state.write();
            state.session.establish(UserInfo {
                id: 1,
                username: "alice".to_string(),
                role: Role::Admin,
            });
            state.current_screen = Screen::Users;
        }
        app.state.write().session.clear();

        app.on_tick();
        assert_eq!(app.state.read().current_screen, Screen::Login);
    }

    #[test]
    fn test_employee_cannot_open_admin_screen() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::with_session_file(dir.path().join("session.json"));

        {
            let mut state = app.state.write();
            state.session.establish(UserInfo {
                id: 2,
                username: "bob".to_string(),
                role: Role::Employee,
            });
            state.current_screen = Screen::Register;
        }

        app.handle_screen_change(Screen::Users);
        assert_eq!(app.state.read().current_screen, Screen::Login);
    }
}
