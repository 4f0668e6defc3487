//! # Background Tasks
//!
//! Async tasks that perform the actual network I/O. Each task reads what
//! it needs under a short-lived lock, spawns onto the shared runtime and
//! reports back through the event channel; state is never mutated from
//! inside a task after the spawn point.

pub(crate) mod categories;
pub(crate) mod products;
pub(crate) mod sales;
pub(crate) mod session;
pub(crate) mod users;
