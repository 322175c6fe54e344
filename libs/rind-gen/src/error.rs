//! # Pipeline Errors
//!
//! Error type for the top-level generation entry point.

use config::ConfigError;
use rind_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating a model.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Primitive generation failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}
