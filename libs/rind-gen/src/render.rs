//! # Render Payload
//!
//! The flat, serializable hand-off to the external renderer. The
//! pipeline ends here; displaying the model is someone else's job.

use rind_mesh::Mesh;
use serde::Serialize;

/// GPU-friendly view of a finished model.
///
/// Positions are flattened `[x, y, z, ...]` f32 triples, indices are
/// flattened triangle corners, and colors (when present) are flattened
/// RGB bytes. The renderer only needs to honor `use_vertex_colors` and
/// the background hint.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPayload {
    /// Flattened vertex positions.
    pub positions: Vec<f32>,
    /// Flattened triangle indices.
    pub indices: Vec<u32>,
    /// Flattened per-vertex RGB colors, if the mesh carries any.
    pub colors: Option<Vec<u8>>,
    /// Whether the renderer should read the color channel.
    pub use_vertex_colors: bool,
    /// Background color hint.
    pub background: [u8; 3],
}

impl RenderPayload {
    /// Builds a payload from a finished mesh.
    pub fn from_mesh(mesh: &Mesh, background: [u8; 3]) -> Self {
        let colors = mesh.colors_u8();
        Self {
            positions: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            use_vertex_colors: colors.is_some(),
            colors,
            background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_payload_lengths() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);

        let payload = RenderPayload::from_mesh(&mesh, [0, 0, 0]);
        assert_eq!(payload.positions.len(), 9);
        assert_eq!(payload.indices, vec![0, 1, 2]);
        assert!(payload.colors.is_none());
        assert!(!payload.use_vertex_colors);
    }

    #[test]
    fn test_payload_with_colors() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.set_colors(vec![[255, 0, 0]]);

        let payload = RenderPayload::from_mesh(&mesh, [10, 20, 30]);
        assert!(payload.use_vertex_colors);
        assert_eq!(payload.colors, Some(vec![255, 0, 0]));
        assert_eq!(payload.background, [10, 20, 30]);
    }
}
