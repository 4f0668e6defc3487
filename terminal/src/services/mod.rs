//! # Services
//!
//! External integrations. Everything the terminal knows about the world
//! arrives through the backend REST API in [`api`].

pub mod api;
