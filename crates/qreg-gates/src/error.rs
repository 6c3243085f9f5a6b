//! Error types for the gate catalog.

use thiserror::Error;

/// Errors that can occur while building or loading a gate catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// No gate with this name is registered in the catalog.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Gate matrix has the wrong dimensions.
    #[error("Gate '{gate_name}' must be {expected}x{expected}, got {rows}x{cols}")]
    InvalidShape {
        /// Name of the gate.
        gate_name: String,
        /// Expected side length.
        expected: usize,
        /// Actual row count.
        rows: usize,
        /// Actual column count.
        cols: usize,
    },

    /// Gate matrix is not unitary within tolerance.
    #[error("Gate '{gate_name}' is not unitary (max deviation {deviation:.3e})")]
    NotUnitary {
        /// Name of the gate.
        gate_name: String,
        /// Largest entry of |U†U - I|.
        deviation: f64,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse gate catalog: {0}")]
    Parse(String),

    /// Catalog file has an extension we don't read.
    #[error("Unsupported catalog format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// I/O error while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GateError {
    fn from(e: serde_json::Error) -> Self {
        GateError::Parse(e.to_string())
    }
}

impl From<serde_yaml_ng::Error> for GateError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        GateError::Parse(e.to_string())
    }
}

/// Result type for gate catalog operations.
pub type GateResult<T> = Result<T, GateError>;
