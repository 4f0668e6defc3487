//! # Screens
//!
//! One module per screen. Every screen renders from an immutable state
//! snapshot and reports user actions through `&mut App`.

pub mod categories;
pub mod dashboard;
pub mod login;
pub mod products;
pub mod register;
pub mod sales;
pub mod users;
