//! # Mesh Errors
//!
//! Error types for primitive generation and boolean operations.

use thiserror::Error;

/// Errors that can occur while building or combining meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (non-positive radius, too few segments, ...)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Invalid mesh topology (out-of-range indices, open surface, ...)
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Boolean operation could not produce a result
    #[error("Boolean operation failed: {message}")]
    BooleanFailed { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }
}
