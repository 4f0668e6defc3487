//! # Backend API
//!
//! REST client for the point-of-sale backend. [`client::ApiClient`] owns
//! the HTTP connection pool, the bearer token and the session-expiry
//! hook; the endpoint modules hold one free function per route.

pub mod auth;
pub mod categories;
pub mod client;
pub mod products;
pub mod sales;
pub mod users;

pub use client::ApiClient;
