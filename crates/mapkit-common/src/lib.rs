//! # MapKit Common
//!
//! Common error types and logging configuration for the MapKit region-map
//! engine.
//!
//! ## Features
//!
//! - Unified error type for the document/render boundary
//! - Logging configuration and setup

use thiserror::Error;

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat};

/// Unified error type for MapKit.
///
/// The map core itself never fails: extraction, classification, and
/// composition all degrade to "no value" on bad input. This type covers the
/// boundary around the core — loading and persisting the structured
/// document, and tool-side configuration.
#[derive(Error, Debug)]
pub enum MapKitError {
    /// Document load/store errors.
    #[error("Document error: {message}")]
    Document {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Scene composition/serialization errors.
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors.
    #[error("Config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MapKitError {
    /// Create a document error.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
            source: None,
        }
    }

    /// Create a document error with source.
    pub fn document_with_source<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::Document {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
            source: None,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Get the error category for diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            MapKitError::Document { .. } => "document",
            MapKitError::Render { .. } => "render",
            MapKitError::Config { .. } => "config",
            MapKitError::Io(_) => "io",
            MapKitError::Json(_) => "json",
            MapKitError::NotFound(_) => "not_found",
            MapKitError::InvalidArgument(_) => "invalid_argument",
        }
    }
}

/// Result type alias for MapKit operations.
pub type Result<T> = std::result::Result<T, MapKitError>;

/// Extension trait for Option.
pub trait OptionExt<T> {
    /// Convert None to a NotFound error.
    fn ok_or_not_found(self, resource: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, resource: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| MapKitError::NotFound(resource.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(MapKitError::document("test").category(), "document");
        assert_eq!(MapKitError::render("test").category(), "render");
        assert_eq!(MapKitError::NotFound("x".into()).category(), "not_found");
    }

    #[test]
    fn test_option_ext() {
        let some: Option<i32> = Some(42);
        assert_eq!(some.ok_or_not_found("test").unwrap(), 42);

        let none: Option<i32> = None;
        assert!(matches!(
            none.ok_or_not_found("test"),
            Err(MapKitError::NotFound(_))
        ));
    }
}
