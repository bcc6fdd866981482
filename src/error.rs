//! Error types for acadgen

use std::io;
use thiserror::Error;

/// Main error type for acadgen operations
#[derive(Debug, Error)]
pub enum CadError {
    /// IO error occurred while writing a generated program
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A table entry with the same name already exists
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Invalid handle reference
    #[error("Invalid handle: {0:#X}")]
    InvalidHandle(u64),

    /// Object not found in document
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Invalid scope configuration. No toggle combination currently triggers it.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Generation was requested without a document
    #[error("No document model was supplied")]
    MissingDocument,

    /// The dependency graph contains a cycle that cannot be broken with a
    /// forward declaration
    #[error("Unresolved reference cycle through: {}", units.join(" -> "))]
    UnresolvedCycle { units: Vec<String> },

    /// A statement referenced a construct that has no variable yet
    #[error("No variable bound for {unit}")]
    MissingBinding { unit: String },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for acadgen operations
pub type Result<T> = std::result::Result<T, CadError>;

impl From<String> for CadError {
    fn from(s: String) -> Self {
        CadError::Custom(s)
    }
}

impl From<&str> for CadError {
    fn from(s: &str) -> Self {
        CadError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CadError::DuplicateEntry("L1".to_string());
        assert_eq!(err.to_string(), "Duplicate entry: L1");
    }

    #[test]
    fn test_cycle_error_lists_units() {
        let err = CadError::UnresolvedCycle {
            units: vec!["Group G1".to_string(), "Group G2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unresolved reference cycle through: Group G1 -> Group G2"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CadError = io_err.into();
        assert!(matches!(err, CadError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let err: CadError = "boom".into();
        assert!(matches!(err, CadError::Custom(ref m) if m == "boom"));
    }
}
