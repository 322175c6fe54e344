//! # Torus Primitive
//!
//! Generates a watertight torus mesh from a parametric grid.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a torus with its ring axis along +Z.
///
/// The surface is a closed parametric grid: `major_segments` steps
/// around the ring circle, `minor_segments` steps around the tube
/// circle, with both seams wrapping back onto the first row/column.
/// Every undirected edge therefore borders exactly two triangles and
/// the mesh is watertight by construction.
///
/// # Arguments
///
/// * `major_radius` - Distance from the origin to the tube center
/// * `minor_radius` - Radius of the tube cross-section
/// * `major_segments` - Segments around the ring circle
/// * `minor_segments` - Segments around the tube circle
///
/// # Example
///
/// ```rust
/// use rind_mesh::primitives::create_torus;
///
/// let mesh = create_torus(1.0, 0.05, 32, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 32 * 16);
/// assert!(mesh.is_watertight());
/// ```
pub fn create_torus(
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
) -> Result<Mesh, MeshError> {
    if major_radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Torus major radius must be positive: {}",
            major_radius
        )));
    }
    if minor_radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Torus minor radius must be positive: {}",
            minor_radius
        )));
    }
    if major_segments < 3 || minor_segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Torus segments must be at least 3: {}x{}",
            major_segments, minor_segments
        )));
    }

    let vertex_count = (major_segments * minor_segments) as usize;
    let mut mesh = Mesh::with_capacity(vertex_count, vertex_count * 2);

    // Vertex (i, j) sits at ring angle u and tube angle v.
    for i in 0..major_segments {
        let u = TAU * f64::from(i) / f64::from(major_segments);
        let (sin_u, cos_u) = u.sin_cos();

        for j in 0..minor_segments {
            let v = TAU * f64::from(j) / f64::from(minor_segments);
            let (sin_v, cos_v) = v.sin_cos();

            let ring = major_radius + minor_radius * cos_v;
            mesh.add_vertex(DVec3::new(
                ring * cos_u,
                ring * sin_u,
                minor_radius * sin_v,
            ));
        }
    }

    let index = |i: u32, j: u32| (i % major_segments) * minor_segments + (j % minor_segments);

    // Two CCW triangles per grid quad, outward-facing.
    for i in 0..major_segments {
        for j in 0..minor_segments {
            let a = index(i, j);
            let b = index(i + 1, j);
            let c = index(i + 1, j + 1);
            let d = index(i, j + 1);

            mesh.add_triangle(a, b, c);
            mesh.add_triangle(a, c, d);
        }
    }

    Ok(mesh)
}
