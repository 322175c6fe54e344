//! # Mesh Combiner
//!
//! Reduces the generated part list to a single mesh, preferring an
//! exact boolean union and degrading to concatenation when the union
//! cannot be computed.

use rind_mesh::ops::boolean::union;
use rind_mesh::{Mesh, MeshError};
use tracing::{debug, warn};

/// Combines all parts into one mesh.
///
/// With `use_union` set, the parts are folded left-to-right through the
/// boolean union. A failure at any step abandons the boolean path for
/// the whole set: the result degrades to a plain concatenation of every
/// input (never a partial-union hybrid), and a warning records the
/// reason. With `use_union` unset, the parts are concatenated directly.
///
/// An empty list yields an empty mesh; a single part is returned
/// unchanged on both paths.
pub fn combine(parts: &[Mesh], use_union: bool) -> Mesh {
    match parts {
        [] => Mesh::new(),
        [only] => only.clone(),
        _ if use_union => match union_all(parts) {
            Ok(mesh) => mesh,
            Err(error) => {
                warn!(%error, "boolean union failed, falling back to concatenation");
                concatenate(parts)
            }
        },
        _ => concatenate(parts),
    }
}

/// Left-fold of the boolean union over `parts`.
///
/// Each incoming part must be watertight; the boolean path has no
/// meaning for open surfaces. Intermediate results are accepted as the
/// union produces them.
fn union_all(parts: &[Mesh]) -> Result<Mesh, MeshError> {
    let Some((first, rest)) = parts.split_first() else {
        return Ok(Mesh::new());
    };

    if !first.is_watertight() {
        return Err(MeshError::invalid_topology("part 0 is not watertight"));
    }

    let mut result = first.clone();
    for (step, part) in rest.iter().enumerate() {
        if !part.is_watertight() {
            return Err(MeshError::invalid_topology(format!(
                "part {} is not watertight",
                step + 1
            )));
        }
        debug!(step = step + 1, total = parts.len(), "union step");
        result = union(&result, part)?;
    }

    Ok(result)
}

/// Appends every part's vertices and faces into one mesh, offsetting
/// indices and deduplicating nothing.
fn concatenate(parts: &[Mesh]) -> Mesh {
    let mut result = Mesh::with_capacity(
        parts.iter().map(Mesh::vertex_count).sum(),
        parts.iter().map(Mesh::triangle_count).sum(),
    );
    for part in parts {
        result.merge(part);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use rind_mesh::primitives::{create_sphere, create_torus};

    /// An open surface: watertightness fails, so the union path must
    /// degrade to concatenation.
    fn open_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    fn sample_parts() -> Vec<Mesh> {
        vec![
            create_sphere(0.6, 8).unwrap(),
            create_torus(1.0, 0.05, 12, 6).unwrap(),
            create_torus(1.5, 0.05, 12, 6).unwrap(),
        ]
    }

    #[test]
    fn test_combine_empty_list() {
        assert!(combine(&[], true).is_empty());
        assert!(combine(&[], false).is_empty());
    }

    #[test]
    fn test_combine_single_part_unchanged() {
        let sphere = create_sphere(1.0, 8).unwrap();
        for use_union in [true, false] {
            let result = combine(std::slice::from_ref(&sphere), use_union);
            assert_eq!(result.vertex_count(), sphere.vertex_count());
            assert_eq!(result.triangle_count(), sphere.triangle_count());
        }
    }

    #[test]
    fn test_combine_concatenation_sums_counts() {
        let parts = sample_parts();
        let total_vertices: usize = parts.iter().map(Mesh::vertex_count).sum();
        let total_triangles: usize = parts.iter().map(Mesh::triangle_count).sum();

        let result = combine(&parts, false);
        assert_eq!(result.vertex_count(), total_vertices);
        assert_eq!(result.triangle_count(), total_triangles);
    }

    #[test]
    fn test_combine_union_produces_single_mesh() {
        let result = combine(&sample_parts(), true);
        assert!(result.vertex_count() > 0);
        assert!(result.triangle_count() > 0);
    }

    #[test]
    fn test_union_failure_mid_fold_degrades_to_full_concatenation() {
        // The open triangle sits at index 2, so the fold fails after two
        // successful parts. The result must still be the concatenation of
        // ALL four inputs, not a union of the first two plus leftovers.
        let parts = vec![
            create_sphere(0.6, 8).unwrap(),
            create_torus(1.0, 0.05, 12, 6).unwrap(),
            open_triangle(),
            create_torus(1.5, 0.05, 12, 6).unwrap(),
        ];
        let total_vertices: usize = parts.iter().map(Mesh::vertex_count).sum();
        let total_triangles: usize = parts.iter().map(Mesh::triangle_count).sum();

        let result = combine(&parts, true);
        assert_eq!(result.vertex_count(), total_vertices);
        assert_eq!(result.triangle_count(), total_triangles);
    }

    #[test]
    fn test_union_failure_at_first_part_degrades() {
        let parts = vec![open_triangle(), create_sphere(0.6, 8).unwrap()];
        let total_vertices: usize = parts.iter().map(Mesh::vertex_count).sum();

        let result = combine(&parts, true);
        assert_eq!(result.vertex_count(), total_vertices);
    }
}
