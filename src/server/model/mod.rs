//! Server application models and type definitions.
//!
//! This module contains the application state shared with every handler and type aliases for
//! the SeaORM database models.

/// State shared with every handler
pub mod app;
/// SeaORM model aliases
pub mod db;
