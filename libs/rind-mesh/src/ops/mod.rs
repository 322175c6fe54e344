//! # Mesh Operations
//!
//! Solid-geometry operations on meshes.

pub mod boolean;
