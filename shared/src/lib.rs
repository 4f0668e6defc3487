//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the point-of-sale terminal and
//! the backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user management DTOs
//!   - **[`dto::catalog`]**: Product and category DTOs
//!   - **[`dto::sales`]**: Sale creation, history, and report DTOs
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust, which maps to snake_case in
//!   JSON by default
//! - Monetary amounts are `rust_decimal::Decimal` and serialize as plain
//!   JSON numbers (exact in decimal, no binary float drift)
//! - Timestamps are `chrono::DateTime<Utc>` in RFC 3339 form
//! - All types implement both `Serialize` and `Deserialize`

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
