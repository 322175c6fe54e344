//! # Polygon for BSP Operations
//!
//! Convex polygon with plane and splitting support.

use super::plane::{Classification, Plane};
use glam::DVec3;

/// A convex polygon lying in a plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon from vertices in counter-clockwise order.
    ///
    /// Returns `None` when the first three vertices are degenerate.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Returns the polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding order and plane orientation in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classifies this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = 0;
        let mut back = 0;

        for &v in &self.vertices {
            match plane.classify_point(v) {
                Classification::Front => front += 1,
                Classification::Back => back += 1,
                _ => {}
            }
        }

        if front > 0 && back > 0 {
            Classification::Spanning
        } else if front > 0 {
            Classification::Front
        } else if back > 0 {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Splits this polygon by a plane, appending the pieces to the
    /// appropriate output lists (csg.js convention).
    ///
    /// Coplanar polygons go to `coplanar_front` or `coplanar_back`
    /// depending on whether they face the same way as the plane.
    pub fn split(
        &self,
        plane: &Plane,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    coplanar_front.push(self.clone());
                } else {
                    coplanar_back.push(self.clone());
                }
            }
            Classification::Front => front.push(self.clone()),
            Classification::Back => back.push(self.clone()),
            Classification::Spanning => {
                let mut front_verts = Vec::with_capacity(self.vertices.len() + 1);
                let mut back_verts = Vec::with_capacity(self.vertices.len() + 1);

                for i in 0..self.vertices.len() {
                    let j = (i + 1) % self.vertices.len();
                    let vi = self.vertices[i];
                    let vj = self.vertices[j];

                    let ci = plane.classify_point(vi);
                    let cj = plane.classify_point(vj);

                    if ci != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ci != Classification::Front {
                        back_verts.push(vi);
                    }

                    // Edge crosses the plane: insert the intersection on
                    // both sides.
                    if (ci == Classification::Front && cj == Classification::Back)
                        || (ci == Classification::Back && cj == Classification::Front)
                    {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let t = di / (di - dj);
                        let intersection = vi.lerp(vj, t);
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                if let Some(poly) = Polygon::from_vertices(front_verts) {
                    front.push(poly);
                }
                if let Some(poly) = Polygon::from_vertices(back_verts) {
                    back.push(poly);
                }
            }
        }
    }
}
