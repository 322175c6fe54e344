//! # Plane for BSP Operations
//!
//! Plane representation with point classification.

use glam::DVec3;

/// Epsilon for front/back classification against a plane.
pub(super) const PLANE_EPSILON: f64 = 1e-5;

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// On the positive side of the plane.
    Front,
    /// On the negative side of the plane.
    Back,
    /// Within epsilon of the plane.
    Coplanar,
    /// Has vertices on both sides (polygons only).
    Spanning,
}

/// A plane defined by a unit normal and its distance from the origin.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal.
    pub normal: DVec3,
    /// Distance from origin along the normal.
    pub w: f64,
}

impl Plane {
    /// Creates a plane from three points in counter-clockwise order.
    ///
    /// Returns `None` for degenerate (near-collinear) triples.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length() < PLANE_EPSILON * PLANE_EPSILON {
            return None;
        }
        let normal = cross.normalize();
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Reverses the plane orientation in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive in front, negative behind, near zero on the plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point relative to the plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            Classification::Front
        } else if dist < -PLANE_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }
}
