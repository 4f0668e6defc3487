//! # PDV Terminal
//!
//! Native desktop point-of-sale terminal. A thin client over the
//! backend REST API: the backend owns pricing, stock and permissions;
//! the terminal renders state, validates input early and keeps the
//! operator signed in across restarts.
//!
//! ## Architecture
//!
//! - [`app`]: event-driven orchestrator, state, handlers and tasks
//! - [`cart`]: pure cart engine for the register screen
//! - [`session`]: identity, persistence and the route guard
//! - [`services`]: REST client and endpoint bindings
//! - [`ui`]: egui screens and widgets
//! - [`core`]: error types and the `ApiService` trait
//!
//! The main thread owns egui and drains an `async_channel` of
//! [`app::AppEvent`]s each frame; tokio tasks perform all network I/O
//! and never touch the UI directly.

pub mod app;
pub mod cart;
pub mod core;
pub mod services;
pub mod session;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use cart::{Cart, CartError, CartLine};
pub use crate::core::error::{ApiError, AppError, Result};
