//! HTTP route handlers.

pub mod fallback;
pub mod health;
pub mod metrics;
pub mod root;
