//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, identity, and user management DTOs
//! - [`catalog`] - Product and category DTOs
//! - [`sales`] - Sale creation, paginated history, and report DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "username": "alice", "password": "secret" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": { "id": 1, "username": "alice", "role": "admin" }
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod sales;

pub use auth::*;
pub use catalog::*;
pub use sales::*;
