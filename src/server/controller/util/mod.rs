//! Extractors shared by the controllers.

/// Bearer token extractor
pub mod bearer;
/// JSON-rejecting path, query & body extractors
pub mod extract;
