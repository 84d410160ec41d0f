//! Typed error handling for the stocksage engine
//!
//! Every condition in the engine is locally recoverable: validation failures
//! and stale ids are returned to the caller with the input collection
//! untouched. The hierarchy exists so presentation code can match on the
//! specific condition instead of string-matching a generic error.
//!
//! # Error Categories
//!
//! - [`StoreError`]: errors from collection operations (CRUD)
//! - [`ConfigError`]: errors from seed-data parsing and loading
//!
//! # Example
//!
//! ```rust,ignore
//! match store.update(&inventory, id, draft) {
//!     Ok((inventory, product)) => { /* re-render with the new collection */ }
//!     Err(StoreError::NotFound { .. }) => { /* stale reference, refresh */ }
//!     Err(StoreError::Validation(errors)) => {
//!         for (field, message) in errors.iter() { /* show under field */ }
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::entity::RecordId;

/// The main error type for the stocksage engine
#[derive(Debug)]
pub enum StockSageError {
    /// Collection operation errors (CRUD)
    Store(StoreError),

    /// Seed-data configuration errors
    Config(ConfigError),
}

impl fmt::Display for StockSageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockSageError::Store(e) => write!(f, "{}", e),
            StockSageError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StockSageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StockSageError::Store(e) => Some(e),
            StockSageError::Config(e) => Some(e),
        }
    }
}

impl StockSageError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StockSageError::Store(e) => e.error_code(),
            StockSageError::Config(_) => "CONFIG_ERROR",
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors from collection operations
#[derive(Debug)]
pub enum StoreError {
    /// No record with the given id exists in the collection.
    /// Callers should treat this as a stale-reference condition.
    NotFound {
        resource: &'static str,
        id: RecordId,
    },

    /// The draft failed validation; the collection is unchanged
    Validation(ValidationErrors),

    /// Failed to serialize/deserialize a draft during normalization
    Serialization {
        resource: &'static str,
        message: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { resource, id } => {
                write!(f, "{} with id '{}' not found", resource, id)
            }
            StoreError::Validation(errors) => {
                write!(f, "Validation errors: {}", errors)
            }
            StoreError::Serialization { resource, message } => {
                write!(f, "Failed to serialize/deserialize {}: {}", resource, message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::Validation(_) => "VALIDATION_ERROR",
            StoreError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<StoreError> for StockSageError {
    fn from(err: StoreError) -> Self {
        StockSageError::Store(err)
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Validation(errors)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Per-field validation errors, keyed by field name.
///
/// Validation runs across all fields before returning, so the map holds one
/// message for every failing field and callers can display them all at once.
/// Insertion order follows rule order, which follows form layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: IndexMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. The first message per field wins;
    /// later validators for the same field are not consulted.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", msgs.join(", "))
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors from seed-data configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a seed file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading a seed file
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse seed file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse seed data: {}", message)
                }
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for StockSageError {
    fn from(err: ConfigError) -> Self {
        StockSageError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for stocksage operations
pub type StockSageResult<T> = Result<T, StockSageError>;

// =============================================================================
// Tests
// =============================================================================
