//! # Reusable Widgets

pub mod forms;
pub mod nav_bar;
pub mod notifications;
pub mod status_bar;
pub mod tables;
