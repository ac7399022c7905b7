//! Tests driving the full router.
//!
//! Requests pass through routing, extractors, the bearer gate and the fallback exactly as they
//! would in production.

mod catalog;
