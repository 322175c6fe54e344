//! # Rind Generator
//!
//! Generates symmetric solid models made of concentric toroidal "rinds"
//! around an optional central sphere, colored by a radial gradient.
//!
//! ## Architecture
//!
//! ```text
//! directions → shells (orient + primitives) → combine → gradient → payload
//! ```
//!
//! The pipeline is a pure function of its [`ShellConfig`]: the direction
//! set is fixed, every (radius, direction) placement is generated
//! independently, the parts fold through a boolean union (degrading to
//! concatenation on failure), and colors are derived from vertex
//! distance to the origin. Rendering is an external concern; the
//! pipeline stops at [`render::RenderPayload`].
//!
//! ## Usage
//!
//! ```rust
//! use config::ShellConfig;
//!
//! let config = ShellConfig {
//!     shell_count: 1,
//!     torus_major_segments: 12,
//!     torus_minor_segments: 6,
//!     sphere_segments: 8,
//!     apply_union: false,
//!     ..ShellConfig::default()
//! };
//! let mesh = rind_gen::generate(&config).unwrap();
//! assert!(mesh.colors().is_some());
//! ```

pub mod combine;
pub mod directions;
pub mod error;
pub mod gradient;
pub mod orient;
pub mod render;
pub mod shells;

pub use config::ShellConfig;
pub use error::GenerateError;
pub use render::RenderPayload;
pub use rind_mesh::Mesh;

use tracing::debug;

/// Runs the full generation pipeline for one configuration.
///
/// Validates the configuration, generates all parts, combines them, and
/// attaches the radial gradient when enabled. No step here is fatal
/// beyond invalid configuration or a failed primitive build; a boolean
/// union failure silently degrades to concatenation (with a warning in
/// the log).
pub fn generate(config: &ShellConfig) -> Result<Mesh, GenerateError> {
    config.validate()?;

    let parts = shells::generate_parts(config)?;
    debug!(parts = parts.len(), "combining parts");
    let mut mesh = combine::combine(&parts, config.apply_union);

    if config.apply_gradient {
        gradient::apply_radial_gradient(&mut mesh, &config.gradient_stops);
    }

    Ok(mesh)
}

/// Generates a model and wraps it in the renderer hand-off payload.
pub fn generate_payload(config: &ShellConfig) -> Result<RenderPayload, GenerateError> {
    let mesh = generate(config)?;
    Ok(RenderPayload::from_mesh(&mesh, config.background))
}
