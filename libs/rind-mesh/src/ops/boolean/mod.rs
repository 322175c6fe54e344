//! # Boolean Union (CSG)
//!
//! Exact solid union of two meshes using BSP trees, based on the csg.js
//! algorithm by Evan Wallace:
//!
//! ```text
//! a.clip_to(b); b.clip_to(a); b.invert(); b.clip_to(a); b.invert();
//! combine(a, b)
//! ```
//!
//! Unlike a merge, the union removes the surface parts of each operand
//! that lie inside the other, producing one continuous boundary.
//!
//! The operation is explicitly fallible: degenerate input, open
//! surfaces, and collapsed results are reported as errors so the caller
//! can fall back to plain concatenation.
//!
//! ## Example
//!
//! ```rust
//! use rind_mesh::ops::boolean::union;
//! use rind_mesh::primitives::create_sphere;
//!
//! let a = create_sphere(1.0, 12).unwrap();
//! let mut b = create_sphere(1.0, 12).unwrap();
//! b.transform(&glam::DMat4::from_translation(glam::DVec3::X));
//! let combined = union(&a, &b).unwrap();
//! assert!(combined.vertex_count() > 0);
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::error::MeshError;
use crate::mesh::Mesh;
use bsp::BspNode;
use polygon::Polygon;

/// Computes the solid union of two meshes.
///
/// An empty operand acts as the identity. Degenerate triangles are
/// dropped during polygon conversion.
///
/// # Errors
///
/// - [`MeshError::InvalidTopology`] when an operand has out-of-range
///   indices
/// - [`MeshError::DegenerateGeometry`] when a non-empty operand yields
///   no usable polygons
/// - [`MeshError::BooleanFailed`] when the union of two non-empty
///   solids collapses to nothing
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let polys_a = mesh_to_polygons(a)?;
    let polys_b = mesh_to_polygons(b)?;

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // Union: remove each solid's interior portions, dropping B's faces
    // coplanar with A's to avoid doubled surface.
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result_polys = bsp_a.all_polygons();
    result_polys.extend(bsp_b.all_polygons());

    if result_polys.is_empty() {
        return Err(MeshError::boolean_failed(
            "union of non-empty solids produced no polygons",
        ));
    }

    Ok(polygons_to_mesh(&result_polys))
}

/// Converts mesh triangles into BSP polygons.
///
/// Degenerate triangles are dropped silently (the BSP cannot split
/// against a zero-area plane anyway); out-of-range indices are a hard
/// error.
fn mesh_to_polygons(mesh: &Mesh) -> Result<Vec<Polygon>, MeshError> {
    let vertex_count = mesh.vertex_count() as u32;
    let mut polygons = Vec::with_capacity(mesh.triangle_count());

    for tri in mesh.triangles() {
        if tri.iter().any(|&idx| idx >= vertex_count) {
            return Err(MeshError::invalid_topology(
                "triangle index out of range in union operand",
            ));
        }
        let vertices = vec![
            mesh.vertex(tri[0]),
            mesh.vertex(tri[1]),
            mesh.vertex(tri[2]),
        ];
        if let Some(poly) = Polygon::from_vertices(vertices) {
            polygons.push(poly);
        }
    }

    if polygons.is_empty() {
        return Err(MeshError::degenerate(
            "mesh has no non-degenerate triangles",
        ));
    }
    Ok(polygons)
}

/// Converts BSP polygons back to a triangle mesh by fan triangulation.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();

    for poly in polygons {
        let vertices = poly.vertices();
        let base = mesh.add_vertex(vertices[0]);
        let mut prev = mesh.add_vertex(vertices[1]);
        for &v in &vertices[2..] {
            let next = mesh.add_vertex(v);
            mesh.add_triangle(base, prev, next);
            prev = next;
        }
    }

    mesh
}
