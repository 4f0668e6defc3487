//! # Event Handler
//!
//! Handles async event results from background tasks, updating
//! application state accordingly. Every handler acquires the write lock
//! for a single event only, so the UI thread is never blocked for long.

use shared::{Category, LoginResponse, Product, Sale, SalesPage, SalesSummary, UserInfo};

use crate::app::state::NotificationKind;
use crate::app::{handlers, App, AppEvent};
use crate::session::storage::{self, StoredSession};
use crate::utils::format;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::SessionRevalidated(result) => self.handle_session_revalidated(result),
            AppEvent::SessionExpired => self.handle_session_expired(),
            AppEvent::RegisterProductsLoaded { seq, result } => {
                self.handle_register_products_loaded(seq, result)
            }
            AppEvent::AdminProductsLoaded { seq, result } => {
                self.handle_admin_products_loaded(seq, result)
            }
            AppEvent::ProductSaved(result) => self.handle_product_saved(result),
            AppEvent::ProductDeleted(result) => self.handle_product_deleted(result),
            AppEvent::StockUpdated(result) => self.handle_stock_updated(result),
            AppEvent::CategoriesLoaded(result) => self.handle_categories_loaded(result),
            AppEvent::CategorySaved(result) => self.handle_category_saved(result),
            AppEvent::CategoryDeleted(result) => self.handle_category_deleted(result),
            AppEvent::UsersLoaded(result) => self.handle_users_loaded(result),
            AppEvent::UserSaved(result) => self.handle_user_saved(result),
            AppEvent::UserDeleted(result) => self.handle_user_deleted(result),
            AppEvent::SaleSubmitted(result) => self.handle_sale_submitted(result),
            AppEvent::SalesLoaded { seq, result } => self.handle_sales_loaded(seq, result),
            AppEvent::SaleDetailLoaded(result) => self.handle_sale_detail_loaded(result),
            AppEvent::SummaryLoaded(result) => self.handle_summary_loaded(result),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<LoginResponse, String>) {
        tracing::info!(success = result.is_ok(), "Processing login result");

        let home = {
            let mut state = self.state.write();
            state.session.authenticating = false;

            let response = match result {
                Ok(response) => response,
                Err(message) => {
                    state.session.reject(message);
                    return;
                }
            };

            if let Some(api_client) = state.api_client.as_ref() {
                api_client.set_token(Some(response.access_token.clone()));
            }
            let stored = StoredSession {
                token: response.access_token,
                user: response.user.clone(),
            };
            if let Err(error) = storage::save(&self.session_file, &stored) {
                tracing::warn!(error = %error, "Failed to persist session");
            }

            state.session.establish(response.user.clone());
            state.login = Default::default();
            state.notify(
                NotificationKind::Success,
                format!("Welcome, {}", response.user.username),
            );

            let home = state.home_screen();
            state.current_screen = home;
            home
        };

        handlers::navigation::trigger_screen_loads(
            self.state.clone(),
            self.event_tx.clone(),
            home,
        );
    }

    fn handle_session_revalidated(&mut self, result: Result<UserInfo, String>) {
        let mut state = self.state.write();
        if !state.session.is_authenticated() {
            return;
        }

        match result {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "Session revalidated");
                state.session.identity = Some(user);
            }
            Err(error) => {
                tracing::warn!(error = %error, "Session revalidation failed, logging out");
                handlers::auth::logout(&mut state, &self.session_file);
                state.notify(
                    NotificationKind::Warning,
                    "Your session could not be verified, please sign in again",
                );
            }
        }
    }

    fn handle_session_expired(&mut self) {
        let mut state = self.state.write();
        if !state.session.is_authenticated() {
            return;
        }

        tracing::info!("Session expired, logging out");
        handlers::auth::logout(&mut state, &self.session_file);
        state.notify(
            NotificationKind::Warning,
            "Session expired, please sign in again",
        );
    }

    fn handle_register_products_loaded(&mut self, seq: u64, result: Result<Vec<Product>, String>) {
        let mut state = self.state.write();
        if seq != state.register.request_seq {
            tracing::debug!(seq, current = state.register.request_seq, "Dropping stale catalog response");
            return;
        }

        state.register.loading = false;
        match result {
            Ok(products) => state.register.products = products,
            Err(error) => state.register.error = Some(error),
        }
    }

    fn handle_admin_products_loaded(&mut self, seq: u64, result: Result<Vec<Product>, String>) {
        let mut state = self.state.write();
        if seq != state.products.request_seq {
            tracing::debug!(seq, current = state.products.request_seq, "Dropping stale product response");
            return;
        }

        state.products.loading = false;
        match result {
            Ok(products) => state.products.items = products,
            Err(error) => state.products.error = Some(error),
        }
    }

    fn handle_product_saved(&mut self, result: Result<Product, String>) {
        {
            let mut state = self.state.write();
            match result {
                Ok(product) => {
                    state.products.dialog = None;
                    state.notify(
                        NotificationKind::Success,
                        format!("Product \"{}\" saved", product.name),
                    );
                }
                Err(error) => {
                    if let Some(dialog) = state.products.dialog.as_mut() {
                        dialog.saving = false;
                        dialog.error = Some(error);
                    }
                    return;
                }
            }
        }
        crate::app::tasks::products::fetch_admin_products(
            self.state.clone(),
            self.event_tx.clone(),
        );
    }

    fn handle_product_deleted(&mut self, result: Result<i64, String>) {
        {
            let mut state = self.state.write();
            match result {
                Ok(product_id) => {
                    state.products.stock_edits.remove(&product_id);
                    state.notify(NotificationKind::Success, "Product deleted");
                }
                Err(error) => {
                    state.notify(NotificationKind::Error, error);
                    return;
                }
            }
        }
        crate::app::tasks::products::fetch_admin_products(
            self.state.clone(),
            self.event_tx.clone(),
        );
    }

    fn handle_stock_updated(&mut self, result: Result<Product, String>) {
        let mut state = self.state.write();
        match result {
            Ok(product) => {
                state.products.stock_edits.remove(&product.id);
                state.notify(
                    NotificationKind::Success,
                    format!("Stock of \"{}\" set to {}", product.name, product.stock),
                );
                if let Some(item) = state
                    .products
                    .items
                    .iter_mut()
                    .find(|item| item.id == product.id)
                {
                    *item = product;
                }
            }
            Err(error) => state.notify(NotificationKind::Error, error),
        }
    }

    fn handle_categories_loaded(&mut self, result: Result<Vec<Category>, String>) {
        let mut state = self.state.write();
        state.categories.loading = false;
        match result {
            Ok(categories) => state.categories.items = categories,
            Err(error) => state.categories.error = Some(error),
        }
    }

    fn handle_category_saved(&mut self, result: Result<Category, String>) {
        {
            let mut state = self.state.write();
            match result {
                Ok(category) => {
                    state.categories.dialog = None;
                    state.notify(
                        NotificationKind::Success,
                        format!("Category \"{}\" saved", category.name),
                    );
                }
                Err(error) => {
                    if let Some(dialog) = state.categories.dialog.as_mut() {
                        dialog.saving = false;
                        dialog.error = Some(error);
                    }
                    return;
                }
            }
        }
        crate::app::tasks::categories::fetch_categories(self.state.clone(), self.event_tx.clone());
    }

    fn handle_category_deleted(&mut self, result: Result<i64, String>) {
        {
            let mut state = self.state.write();
            match result {
                Ok(_) => state.notify(NotificationKind::Success, "Category deleted"),
                Err(error) => {
                    state.notify(NotificationKind::Error, error);
                    return;
                }
            }
        }
        crate::app::tasks::categories::fetch_categories(self.state.clone(), self.event_tx.clone());
    }

    fn handle_users_loaded(&mut self, result: Result<Vec<UserInfo>, String>) {
        let mut state = self.state.write();
        state.users.loading = false;
        match result {
            Ok(users) => state.users.items = users,
            Err(error) => state.users.error = Some(error),
        }
    }

    fn handle_user_saved(&mut self, result: Result<UserInfo, String>) {
        {
            let mut state = self.state.write();
            match result {
                Ok(user) => {
                    state.users.dialog = None;
                    state.notify(
                        NotificationKind::Success,
                        format!("User \"{}\" saved", user.username),
                    );
                }
                Err(error) => {
                    if let Some(dialog) = state.users.dialog.as_mut() {
                        dialog.saving = false;
                        dialog.error = Some(error);
                    }
                    return;
                }
            }
        }
        crate::app::tasks::users::fetch_users(self.state.clone(), self.event_tx.clone());
    }

    fn handle_user_deleted(&mut self, result: Result<i64, String>) {
        {
            let mut state = self.state.write();
            match result {
                Ok(_) => state.notify(NotificationKind::Success, "User deleted"),
                Err(error) => {
                    state.notify(NotificationKind::Error, error);
                    return;
                }
            }
        }
        crate::app::tasks::users::fetch_users(self.state.clone(), self.event_tx.clone());
    }

    fn handle_sale_submitted(&mut self, result: Result<Sale, String>) {
        let refreshed = {
            let mut state = self.state.write();
            match result {
                Ok(sale) => {
                    // A recorded sale empties the cart; the refreshed
                    // catalog below picks up the decremented stock.
                    state.register.cart.clear();
                    let message = format!(
                        "Sale #{} recorded, total {}",
                        sale.id,
                        format::format_currency(sale.total_amount)
                    );
                    state.register.success = Some(message.clone());
                    state.notify(NotificationKind::Success, message);
                    true
                }
                Err(error) => {
                    // The cart stays intact so the operator can retry.
                    state.register.cart.set_submitting(false);
                    state.register.error = Some(error);
                    false
                }
            }
        };

        if refreshed {
            crate::app::tasks::products::fetch_register_products(
                self.state.clone(),
                self.event_tx.clone(),
            );
        }
    }

    fn handle_sales_loaded(&mut self, seq: u64, result: Result<SalesPage, String>) {
        let mut state = self.state.write();
        if seq != state.sales.request_seq {
            tracing::debug!(seq, current = state.sales.request_seq, "Dropping stale sales response");
            return;
        }

        state.sales.loading = false;
        match result {
            Ok(page) => {
                state.sales.sales = page.sales;
                state.sales.total = page.total;
                state.sales.page = page.page;
                state.sales.pages = page.pages.max(1);
            }
            Err(error) => state.sales.error = Some(error),
        }
    }

    fn handle_sale_detail_loaded(&mut self, result: Result<Sale, String>) {
        let mut state = self.state.write();
        state.sales.detail_loading = false;
        match result {
            Ok(sale) => state.sales.detail = Some(sale),
            Err(error) => state.notify(NotificationKind::Error, error),
        }
    }

    fn handle_summary_loaded(&mut self, result: Result<SalesSummary, String>) {
        let mut state = self.state.write();
        state.dashboard.loading = false;
        match result {
            Ok(summary) => state.dashboard.summary = Some(summary),
            Err(error) => state.dashboard.error = Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Screen;
    use shared::{Role, SaleItemRequest};

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::with_session_file(dir.path().join("session.json"));
        (app, dir)
    }

    fn login_response(role: Role) -> LoginResponse {
        LoginResponse {
            access_token: "jwt-token".to_string(),
            user: UserInfo {
                id: 1,
                username: "alice".to_string(),
                role,
            },
        }
    }

    fn product(id: i64, price: &str, stock: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: None,
            price: price.parse().unwrap(),
            stock,
            category_id: None,
        }
    }

    #[test]
    fn test_admin_login_lands_on_dashboard_and_persists() {
        let (mut app, _dir) = test_app();

        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Admin))));

        let state = app.state.read();
        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert!(storage::load(&app.session_file).is_some());
    }

    #[test]
    fn test_employee_login_lands_on_register() {
        let (mut app, _dir) = test_app();

        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Employee))));

        let state = app.state.read();
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
        assert_eq!(state.current_screen, Screen::Register);
    }

    #[test]
    fn test_failed_login_sets_error_without_identity() {
        let (mut app, _dir) = test_app();

        app.handle_event(AppEvent::LoginResult(Err("invalid credentials".to_string())));

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(
            state.session.last_error.as_deref(),
            Some("invalid credentials")
        );
        assert!(storage::load(&app.session_file).is_none());
    }

    #[test]
    fn test_session_expiry_clears_everything() {
        let (mut app, _dir) = test_app();
        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Admin))));

        app.handle_event(AppEvent::SessionExpired);

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Login);
        assert!(storage::load(&app.session_file).is_none());
    }

    #[test]
    fn test_failed_revalidation_logs_out() {
        let (mut app, _dir) = test_app();
        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Admin))));

        app.handle_event(AppEvent::SessionRevalidated(Err(
            "Network error: timeout".to_string()
        )));

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Login);
    }

    #[test]
    fn test_successful_sale_clears_cart() {
        let (mut app, _dir) = test_app();
        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Employee))));

        {
            let mut state = app.state.write();
            state.register.products = vec![product(1, "5.00", 10)];
            state.register.cart.add_product(&product(1, "5.00", 10)).unwrap();
            state.register.cart.set_submitting(true);
        }

        let sale = Sale {
            id: 42,
            timestamp: chrono::Utc::now(),
            user_username: "alice".to_string(),
            items: Vec::new(),
            total_amount: "5.00".parse().unwrap(),
        };
        app.handle_event(AppEvent::SaleSubmitted(Ok(sale)));

        let state = app.state.read();
        assert!(state.register.cart.is_empty());
        assert!(!state.register.cart.is_submitting());
        assert!(state.register.success.as_deref().unwrap().contains("#42"));
    }

    #[test]
    fn test_failed_sale_preserves_cart() {
        let (mut app, _dir) = test_app();
        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Employee))));

        {
            let mut state = app.state.write();
            state.register.cart.add_product(&product(1, "5.00", 10)).unwrap();
            state.register.cart.set_submitting(true);
        }

        app.handle_event(AppEvent::SaleSubmitted(Err(
            "Insufficient stock for Product 1".to_string()
        )));

        let state = app.state.read();
        assert_eq!(state.register.cart.line_count(), 1);
        assert!(!state.register.cart.is_submitting());
        assert_eq!(
            state.register.error.as_deref(),
            Some("Insufficient stock for Product 1")
        );

        // The preserved cart still produces the same request.
        let request = state.register.cart.begin_checkout().unwrap();
        assert_eq!(
            request.items,
            vec![SaleItemRequest { product_id: 1, quantity: 1 }]
        );
    }

    #[test]
    fn test_stale_catalog_response_dropped() {
        let (mut app, _dir) = test_app();
        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Employee))));

        {
            let mut state = app.state.write();
            state.register.request_seq = 3;
            state.register.products = vec![product(9, "1.00", 1)];
        }

        // A response for an older request arrives late.
        app.handle_event(AppEvent::RegisterProductsLoaded {
            seq: 2,
            result: Ok(vec![product(1, "5.00", 10), product(2, "7.00", 4)]),
        });

        let state = app.state.read();
        assert_eq!(state.register.products.len(), 1);
        assert_eq!(state.register.products[0].id, 9);
    }

    #[test]
    fn test_matching_catalog_response_applied() {
        let (mut app, _dir) = test_app();
        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Employee))));

        let seq = app.state.read().register.request_seq;
        app.handle_event(AppEvent::RegisterProductsLoaded {
            seq,
            result: Ok(vec![product(1, "5.00", 10)]),
        });

        let state = app.state.read();
        assert_eq!(state.register.products.len(), 1);
        assert!(!state.register.loading);
    }

    #[test]
    fn test_save_failure_keeps_dialog_open() {
        let (mut app, _dir) = test_app();
        app.handle_event(AppEvent::LoginResult(Ok(login_response(Role::Admin))));

        {
            let mut state = app.state.write();
            state.products.dialog = Some(crate::app::state::ProductForm {
                name: "Coffee".to_string(),
                saving: true,
                ..Default::default()
            });
        }

        app.handle_event(AppEvent::ProductSaved(Err("name already in use".to_string())));

        let state = app.state.read();
        let dialog = state.products.dialog.as_ref().unwrap();
        assert!(!dialog.saving);
        assert_eq!(dialog.error.as_deref(), Some("name already in use"));
    }
}
