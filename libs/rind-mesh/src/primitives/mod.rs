//! # Primitives
//!
//! Watertight mesh generation for the rind pipeline's primitives
//! (torus, sphere).

pub mod sphere;
pub mod torus;

pub use sphere::create_sphere;
pub use torus::create_torus;
