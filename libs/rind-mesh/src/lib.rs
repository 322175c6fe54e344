//! # Rind Mesh
//!
//! Triangle meshes and solid-geometry operations for the concentric rind
//! pipeline. This crate knows nothing about shells or gradients; it
//! provides the building blocks the generator assembles:
//!
//! - [`Mesh`]: vertices, triangle indices, optional per-vertex RGB colors
//! - [`primitives`]: watertight torus and sphere generation
//! - [`ops::boolean`]: fallible boolean union via BSP trees
//!
//! ## Algorithms
//!
//! Everything is pure Rust with no native dependencies:
//! - **Boolean union**: BSP trees (csg.js algorithm)
//! - **Primitives**: parametric tessellation with closed seams
//!
//! ## Usage
//!
//! ```rust
//! use rind_mesh::primitives::{create_sphere, create_torus};
//! use rind_mesh::ops::boolean::union;
//!
//! let a = create_sphere(1.0, 16).unwrap();
//! let b = create_torus(1.5, 0.2, 24, 12).unwrap();
//! let combined = union(&a, &b).unwrap();
//! assert!(combined.vertex_count() > 0);
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use mesh::Mesh;
