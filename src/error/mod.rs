//! Error handling for the item lookup catalog.
//!
//! This module provides:
//! - [`IlError`]: The main error enum for all il operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for il operations.
#[derive(Error, Debug)]
pub enum IlError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Query too short: need at least {min_chars} characters")]
    QueryTooShort { min_chars: usize },

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Catalog is empty")]
    CatalogEmpty,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IlError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Serialization(_) => ErrorCode::SerializationError,
            Self::QueryTooShort { .. } => ErrorCode::SearchQueryTooShort,
            Self::CatalogUnavailable(_) => ErrorCode::CatalogUnavailable,
            Self::CatalogEmpty => ErrorCode::CatalogEmpty,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Import(_) => ErrorCode::ImportFailed,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::QueryTooShort { min_chars } => Some(serde_json::json!({ "min_chars": min_chars })),
            Self::CatalogUnavailable(path) => Some(serde_json::json!({ "path": path })),
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            Self::Import(reason) => Some(serde_json::json!({ "reason": reason })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_il_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Emitted in robot mode so callers can branch on `code` rather than
/// parsing the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "CATALOG_UNAVAILABLE")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 601)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "search", "storage")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from an [`IlError`].
    #[must_use]
    pub fn from_il_error(err: &IlError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        // Regenerate suggestion with new context
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&IlError> for StructuredError {
    fn from(err: &IlError) -> Self {
        Self::from_il_error(err)
    }
}

/// Result type alias using [`IlError`].
pub type Result<T> = std::result::Result<T, IlError>;
