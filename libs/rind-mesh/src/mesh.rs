//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, and optional
//! per-vertex RGB colors.

use config::constants::EPSILON;
use glam::{DMat4, DVec3};
use std::collections::HashMap;

/// A triangle mesh with vertices, indices, and optional vertex colors.
///
/// All geometry uses f64 internally; the renderer boundary converts to
/// f32. Colors are RGB byte triples, one per vertex when present.
///
/// # Example
///
/// ```rust
/// use rind_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional per-vertex RGB colors, same length as `vertices`
    colors: Option<Vec<[u8; 3]>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Attaches per-vertex colors.
    ///
    /// The slice length must equal the vertex count; `validate` reports
    /// any mismatch.
    pub fn set_colors(&mut self, colors: Vec<[u8; 3]>) {
        self.colors = Some(colors);
    }

    /// Returns the vertex colors, if attached.
    pub fn colors(&self) -> Option<&[[u8; 3]]> {
        self.colors.as_deref()
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zero corners for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Appends another mesh, offsetting its triangle indices.
    ///
    /// Vertices and faces are concatenated as-is with no deduplication.
    /// Colors survive only when both meshes carry them; otherwise the
    /// result has none, since a partial color array would violate the
    /// one-color-per-vertex invariant.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        match (&mut self.colors, &other.colors) {
            (Some(own), Some(theirs)) => own.extend_from_slice(theirs),
            (Some(_), None) | (None, Some(_)) => self.colors = None,
            (None, None) => {}
        }
    }

    /// Validates the mesh for structural correctness.
    ///
    /// Checks:
    /// - all triangle indices are in range
    /// - no index-degenerate or zero-area triangles
    /// - color array length matches the vertex count when present
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if let Some(colors) = &self.colors {
            if colors.len() != self.vertices.len() {
                return false;
            }
        }

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            if (v1 - v0).cross(v2 - v0).length() < EPSILON {
                return false;
            }
        }

        true
    }

    /// Returns true if the surface is closed and edge-manifold.
    ///
    /// Every directed edge must be matched by exactly one opposite edge,
    /// so each undirected edge borders exactly two triangles with
    /// consistent winding. This is the precondition for the boolean
    /// union path.
    pub fn is_watertight(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
        for tri in &self.triangles {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                *directed.entry((a, b)).or_insert(0) += 1;
            }
        }

        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }

    /// Exports vertices as a flattened f32 array for the renderer.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as a flattened u32 array for the renderer.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.extend_from_slice(tri);
        }
        result
    }

    /// Exports colors as a flattened RGB byte array, if attached.
    pub fn colors_u8(&self) -> Option<Vec<u8>> {
        self.colors.as_ref().map(|colors| {
            let mut result = Vec::with_capacity(colors.len() * 3);
            for c in colors {
                result.extend_from_slice(c);
            }
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.colors().is_none());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_transform_translates() {
        let mut mesh = triangle_mesh();
        mesh.transform(&DMat4::from_translation(DVec3::new(10.0, 0.0, 0.0)));
        assert_eq!(mesh.vertex(0), DVec3::new(10.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(1), DVec3::new(11.0, 0.0, 0.0));
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut a = triangle_mesh();
        let b = triangle_mesh();
        a.merge(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.triangle_count(), 2);
        assert_eq!(a.triangle(1), [3, 4, 5]);
    }

    #[test]
    fn test_mesh_merge_keeps_colors_when_both_have_them() {
        let mut a = triangle_mesh();
        a.set_colors(vec![[1, 2, 3]; 3]);
        let mut b = triangle_mesh();
        b.set_colors(vec![[4, 5, 6]; 3]);
        a.merge(&b);
        assert_eq!(a.colors().unwrap().len(), 6);
    }

    #[test]
    fn test_mesh_merge_drops_partial_colors() {
        let mut a = triangle_mesh();
        a.set_colors(vec![[1, 2, 3]; 3]);
        let b = triangle_mesh();
        a.merge(&b);
        assert!(a.colors().is_none());
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(triangle_mesh().validate());
    }

    #[test]
    fn test_mesh_validate_out_of_range_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_color_length_mismatch() {
        let mut mesh = triangle_mesh();
        mesh.set_colors(vec![[0, 0, 0]; 2]);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_single_triangle_not_watertight() {
        assert!(!triangle_mesh().is_watertight());
    }

    #[test]
    fn test_mesh_tetrahedron_watertight() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 1.0, 1.0));
        mesh.add_vertex(DVec3::new(1.0, -1.0, -1.0));
        mesh.add_vertex(DVec3::new(-1.0, 1.0, -1.0));
        mesh.add_vertex(DVec3::new(-1.0, -1.0, 1.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 3, 1);
        mesh.add_triangle(0, 2, 3);
        mesh.add_triangle(1, 3, 2);
        assert!(mesh.is_watertight());
    }

    #[test]
    fn test_mesh_exports() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        mesh.set_colors(vec![[7, 8, 9]]);
        assert_eq!(mesh.vertices_f32(), vec![1.0f32, 2.0, 3.0]);
        assert_eq!(mesh.colors_u8(), Some(vec![7, 8, 9]));
    }
}
