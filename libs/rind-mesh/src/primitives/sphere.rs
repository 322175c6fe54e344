//! # Sphere Primitive
//!
//! Generates a watertight UV sphere with pole vertices.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates a sphere centered on the origin.
///
/// Tessellation uses `segments` steps of azimuth and `segments / 2`
/// latitude bands (at least two). A single vertex sits at each pole
/// with triangle fans closing the caps, so the surface is watertight.
/// Spheres are rotationally invariant about the origin and never need
/// an orientation transform.
///
/// # Arguments
///
/// * `radius` - The sphere radius
/// * `segments` - Segments around the circumference
///
/// # Example
///
/// ```rust
/// use rind_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(0.6, 16).unwrap();
/// assert!(mesh.is_watertight());
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Sphere segments must be at least 3: {}",
            segments
        )));
    }

    let rings = (segments / 2).max(2);
    let ring_vertex_count = ((rings - 1) * segments) as usize;
    let mut mesh = Mesh::with_capacity(ring_vertex_count + 2, ring_vertex_count * 2);

    let top = mesh.add_vertex(DVec3::new(0.0, 0.0, radius));

    // Interior rings from just below the top pole down to just above the
    // bottom pole.
    for i in 1..rings {
        let theta = PI * f64::from(i) / f64::from(rings);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let z = radius * cos_theta;

        for j in 0..segments {
            let phi = TAU * f64::from(j) / f64::from(segments);
            mesh.add_vertex(DVec3::new(
                radius * sin_theta * phi.cos(),
                radius * sin_theta * phi.sin(),
                z,
            ));
        }
    }

    let bottom = mesh.add_vertex(DVec3::new(0.0, 0.0, -radius));

    let ring = |i: u32, j: u32| 1 + (i - 1) * segments + (j % segments);

    // Top cap fan.
    for j in 0..segments {
        mesh.add_triangle(top, ring(1, j), ring(1, j + 1));
    }

    // Quad bands between adjacent rings.
    for i in 1..rings - 1 {
        for j in 0..segments {
            let a0 = ring(i, j);
            let a1 = ring(i, j + 1);
            let b0 = ring(i + 1, j);
            let b1 = ring(i + 1, j + 1);

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Bottom cap fan, reversed winding.
    for j in 0..segments {
        mesh.add_triangle(bottom, ring(rings - 1, j + 1), ring(rings - 1, j));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let segments = 16u32;
        let rings = segments / 2;
        let mesh = create_sphere(1.0, segments).unwrap();
        assert_eq!(mesh.vertex_count() as u32, (rings - 1) * segments + 2);
        assert_eq!(mesh.triangle_count() as u32, 2 * segments * (rings - 1));
    }

    #[test]
    fn test_sphere_validates() {
        let mesh = create_sphere(5.0, 16).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_sphere_watertight() {
        let mesh = create_sphere(5.0, 16).unwrap();
        assert!(mesh.is_watertight());
    }

    #[test]
    fn test_sphere_minimum_segments_watertight() {
        let mesh = create_sphere(1.0, 3).unwrap();
        assert!(mesh.is_watertight());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let radius = 0.6;
        let mesh = create_sphere(radius, 24).unwrap();
        for v in mesh.vertices() {
            assert!((v.length() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(create_sphere(0.0, 16).is_err());
        assert!(create_sphere(-1.0, 16).is_err());
    }

    #[test]
    fn test_sphere_too_few_segments() {
        assert!(create_sphere(1.0, 2).is_err());
    }
}
