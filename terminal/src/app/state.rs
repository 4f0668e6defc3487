//! # Application State
//!
//! All state shared between the UI thread and background tasks, grouped
//! per screen. The whole tree lives behind `Arc<RwLock<AppState>>`; the
//! render path takes a short-lived snapshot each frame.

use std::collections::HashMap;
use std::sync::Arc;

use shared::{Category, Product, Role, Sale, SalesSummary, UserInfo};

use crate::cart::Cart;
use crate::services::api::ApiClient;
use crate::session::guard::AccessLevel;
use crate::session::SessionState;

/// Screens of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Register,
    Products,
    Categories,
    Users,
    Sales,
}

impl Screen {
    /// All screens in navigation order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::Register,
            Screen::Products,
            Screen::Categories,
            Screen::Users,
            Screen::Sales,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Register => "Register",
            Screen::Products => "Products",
            Screen::Categories => "Categories",
            Screen::Users => "Users",
            Screen::Sales => "Sales",
        }
    }

    /// Access requirement enforced by the route guard.
    ///
    /// The register is the only screen an employee needs; everything
    /// else is management surface and stays admin-only.
    pub fn access_level(&self) -> AccessLevel {
        match self {
            Screen::Login => AccessLevel::Open,
            Screen::Register => AccessLevel::Authenticated,
            Screen::Dashboard
            | Screen::Products
            | Screen::Categories
            | Screen::Users
            | Screen::Sales => AccessLevel::AdminOnly,
        }
    }
}

/// Severity of a queued toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// State of the register (point-of-sale) screen.
#[derive(Debug, Clone, Default)]
pub struct RegisterState {
    /// Current catalog snapshot shown in the product grid.
    pub products: Vec<Product>,
    pub search: String,
    /// Sequence number of the newest catalog request; older responses
    /// are dropped.
    pub request_seq: u64,
    pub loading: bool,
    pub cart: Cart,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// State of the dashboard screen.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub summary: Option<SalesSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Product create/edit dialog.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    /// `None` when creating, the product id when editing.
    pub editing_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category_id: Option<i64>,
    pub error: Option<String>,
    pub saving: bool,
}

impl ProductForm {
    pub fn for_edit(product: &Product) -> Self {
        Self {
            editing_id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category_id: product.category_id,
            error: None,
            saving: false,
        }
    }
}

/// State of the product management screen.
#[derive(Debug, Clone, Default)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub search: String,
    pub category_filter: Option<i64>,
    pub request_seq: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub dialog: Option<ProductForm>,
    /// Per-row stock entry fields for quick adjustments.
    pub stock_edits: HashMap<i64, String>,
}

/// Category create/edit dialog.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub editing_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub error: Option<String>,
    pub saving: bool,
}

impl CategoryForm {
    pub fn for_edit(category: &Category) -> Self {
        Self {
            editing_id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            error: None,
            saving: false,
        }
    }
}

/// State of the category management screen.
#[derive(Debug, Clone, Default)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
    pub dialog: Option<CategoryForm>,
}

/// User create/edit dialog.
#[derive(Debug, Clone)]
pub struct UserForm {
    pub editing_id: Option<i64>,
    pub username: String,
    /// Left empty on edit to keep the stored password.
    pub password: String,
    pub role: Role,
    pub error: Option<String>,
    pub saving: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            username: String::new(),
            password: String::new(),
            role: Role::Employee,
            error: None,
            saving: false,
        }
    }
}

impl UserForm {
    pub fn for_edit(user: &UserInfo) -> Self {
        Self {
            editing_id: Some(user.id),
            username: user.username.clone(),
            password: String::new(),
            role: user.role,
            error: None,
            saving: false,
        }
    }
}

/// State of the user management screen.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub items: Vec<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
    pub dialog: Option<UserForm>,
}

/// State of the sales history screen.
#[derive(Debug, Clone)]
pub struct SalesState {
    pub sales: Vec<Sale>,
    pub total: i64,
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    /// Date filter form fields, `YYYY-MM-DD` or empty.
    pub start_date: String,
    pub end_date: String,
    pub filter_error: Option<String>,
    pub request_seq: u64,
    pub loading: bool,
    pub error: Option<String>,
    /// Sale opened in the detail popup.
    pub detail: Option<Sale>,
    pub detail_loading: bool,
}

impl Default for SalesState {
    fn default() -> Self {
        Self {
            sales: Vec::new(),
            total: 0,
            page: 1,
            pages: 1,
            per_page: 20,
            start_date: String::new(),
            end_date: String::new(),
            filter_error: None,
            request_seq: 0,
            loading: false,
            error: None,
            detail: None,
            detail_loading: false,
        }
    }
}

/// Login form fields.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// The complete shared application state.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub session: SessionState,
    pub login: LoginForm,
    pub register: RegisterState,
    pub dashboard: DashboardState,
    pub products: ProductsState,
    pub categories: CategoriesState,
    pub users: UsersState,
    pub sales: SalesState,
    /// Shared API client; `None` only in tests that stub the backend.
    pub api_client: Option<Arc<ApiClient>>,
    /// Toasts queued by the event handler, drained by the UI each frame.
    pub pending_notifications: Vec<(NotificationKind, String)>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Queue a toast for the next frame.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.pending_notifications.push((kind, message.into()));
    }

    /// The screen an identity lands on after authentication.
    pub fn home_screen(&self) -> Screen {
        if self.is_admin() {
            Screen::Dashboard
        } else {
            Screen::Register
        }
    }
}
