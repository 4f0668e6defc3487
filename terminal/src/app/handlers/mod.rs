//! # User Action Handlers
//!
//! Synchronous handlers for clicks and form submissions. Handlers
//! validate, mutate state under a short-lived lock and hand real work
//! to the [`crate::app::tasks`] module.

pub(crate) mod auth;
pub(crate) mod categories;
pub(crate) mod navigation;
pub(crate) mod products;
pub(crate) mod register;
pub(crate) mod users;
