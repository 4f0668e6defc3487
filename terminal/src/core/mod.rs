//! # Core Types
//!
//! Application-wide error types and service traits.

pub mod error;
pub mod service;
