//! # Utility Modules
//!
//! Cross-cutting helpers shared by the UI and task layers.

pub mod format;
pub mod runtime;
pub mod validation;
