//! # Orientation Solver
//!
//! Computes the rotation that maps a primitive's canonical axis onto an
//! arbitrary target direction.

use config::constants::ALIGNMENT_EPSILON;
use glam::{DMat4, DVec3};
use std::f64::consts::PI;

/// Canonical "up" axis of freshly generated primitives. Tori come out of
/// the factory with their ring axis along +Z.
pub const REFERENCE_AXIS: DVec3 = DVec3::Z;

/// Returns the rotation carrying `reference` onto `target`.
///
/// Both inputs are expected to be unit length; `target` is re-normalized
/// defensively. The parallel and antiparallel cases are handled without
/// the cross product, which degenerates there:
///
/// - aligned: identity
/// - antiparallel: 180° about an arbitrary axis perpendicular to the
///   reference (valid because the oriented primitives are rotationally
///   symmetric about their own axis)
/// - otherwise: axis-angle from the normalized cross product and
///   `acos` of the clamped dot product
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rind_gen::orient::{rotation_between, REFERENCE_AXIS};
///
/// let rotation = rotation_between(REFERENCE_AXIS, DVec3::X);
/// let rotated = rotation.transform_vector3(REFERENCE_AXIS);
/// assert!(rotated.dot(DVec3::X) > 1.0 - 1e-6);
/// ```
pub fn rotation_between(reference: DVec3, target: DVec3) -> DMat4 {
    let target = target.normalize();
    let dot = reference.dot(target);

    if dot >= 1.0 - ALIGNMENT_EPSILON {
        return DMat4::IDENTITY;
    }
    if dot <= -1.0 + ALIGNMENT_EPSILON {
        return DMat4::from_axis_angle(reference.any_orthonormal_vector(), PI);
    }

    let axis = reference.cross(target).normalize();
    let angle = dot.clamp(-1.0, 1.0).acos();
    DMat4::from_axis_angle(axis, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::great_circle_directions;

    fn assert_aligns(reference: DVec3, target: DVec3) {
        let rotated = rotation_between(reference, target).transform_vector3(reference);
        assert!(
            rotated.dot(target.normalize()) >= 1.0 - 1e-6,
            "rotation of {:?} toward {:?} landed at {:?}",
            reference,
            target,
            rotated
        );
    }

    #[test]
    fn test_rotation_identity_when_aligned() {
        let rotation = rotation_between(DVec3::Z, DVec3::Z);
        assert!(rotation.abs_diff_eq(DMat4::IDENTITY, 1e-12));
    }

    #[test]
    fn test_rotation_antiparallel() {
        assert_aligns(DVec3::Z, -DVec3::Z);
        assert_aligns(DVec3::X, -DVec3::X);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        for target in great_circle_directions() {
            let rotation = rotation_between(REFERENCE_AXIS, target);
            let det = rotation.determinant();
            assert!((det - 1.0).abs() < 1e-9, "determinant {} for {:?}", det, target);
        }
    }

    #[test]
    fn test_rotation_aligns_all_direction_pairs() {
        // Every (reference, target) pair drawn from the direction set,
        // plus the antiparallel partner of each target.
        for reference in great_circle_directions() {
            for target in great_circle_directions() {
                assert_aligns(reference, target);
                assert_aligns(reference, -target);
            }
        }
    }

    #[test]
    fn test_rotation_handles_unnormalized_target() {
        assert_aligns(DVec3::Z, DVec3::new(0.0, 3.0, 0.0));
    }
}
