//! # BSP Tree
//!
//! Binary Space Partitioning tree for the boolean union, following the
//! csg.js algorithm by Evan Wallace.
//!
//! ## Operations
//!
//! - `clip_to`: remove polygons of this tree inside another tree's solid
//! - `invert`: flip all polygons and swap front/back subtrees
//! - `all_polygons`: collect every polygon in the tree
//!
//! ## Stack Safety
//!
//! Tree depth grows with tessellation density, so construction,
//! traversal, and drop all use explicit work stacks instead of
//! recursion.

use super::plane::Plane;
use super::polygon::Polygon;

/// A node partitioning space by a plane, holding the polygons coplanar
/// with it.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Splitting plane, picked from the first polygon inserted.
    plane: Option<Plane>,
    /// Polygons coplanar with `plane`.
    polygons: Vec<Polygon>,
    /// Subtree in front of the plane.
    front: Option<Box<BspNode>>,
    /// Subtree behind the plane.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a BSP tree from a polygon soup.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = BspNode::default();
        if polygons.is_empty() {
            return root;
        }

        // Work stack of (node, polygons destined for it). Raw pointers
        // because each pending node needs mutable access while its
        // ancestors stay borrowed by the stack.
        let mut stack: Vec<(*mut BspNode, Vec<Polygon>)> =
            vec![(&mut root as *mut BspNode, polygons)];

        while let Some((node_ptr, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }
            // Safety: every pointer targets a node owned by `root` and
            // each node appears on the stack at most once.
            let node = unsafe { &mut *node_ptr };

            // The first polygon's plane becomes the splitter; split()
            // then routes that polygon into node.polygons as coplanar.
            let plane = *node.plane.get_or_insert(*polys[0].plane());

            let mut coplanar_back = Vec::new();
            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in &polys {
                poly.split(
                    &plane,
                    &mut node.polygons,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            node.polygons.append(&mut coplanar_back);

            if !front_polys.is_empty() {
                let front = node.front.get_or_insert_with(Default::default);
                stack.push((front.as_mut() as *mut BspNode, front_polys));
            }
            if !back_polys.is_empty() {
                let back = node.back.get_or_insert_with(Default::default);
                stack.push((back.as_mut() as *mut BspNode, back_polys));
            }
        }

        root
    }

    /// Converts the tree from solid to hollow and back: flips every
    /// polygon and plane, and swaps front/back subtrees.
    pub fn invert(&mut self) {
        let mut stack: Vec<*mut BspNode> = vec![self as *mut BspNode];

        while let Some(node_ptr) = stack.pop() {
            // Safety: pointers come from exclusive traversal of `self`.
            let node = unsafe { &mut *node_ptr };

            for poly in &mut node.polygons {
                poly.flip();
            }
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            if let Some(front) = &mut node.front {
                stack.push(front.as_mut() as *mut BspNode);
            }
            if let Some(back) = &mut node.back {
                stack.push(back.as_mut() as *mut BspNode);
            }
        }
    }

    /// Returns the subset of `polygons` outside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            let plane = match node.plane {
                Some(p) => p,
                None => {
                    result.extend(polys);
                    continue;
                }
            };

            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in &polys {
                poly.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            // Coplanar polygons are kept with the side they face.
            front_polys.append(&mut coplanar_front);
            back_polys.append(&mut coplanar_back);

            match &node.front {
                Some(front) => stack.push((front.as_ref(), front_polys)),
                None => result.extend(front_polys),
            }
            // No back subtree means the back half-space is inside the
            // solid; those polygons are discarded.
            if let Some(back) = &node.back {
                stack.push((back.as_ref(), back_polys));
            }
        }

        result
    }

    /// Removes every part of this tree's polygons inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<*mut BspNode> = vec![self as *mut BspNode];

        while let Some(node_ptr) = stack.pop() {
            // Safety: pointers come from exclusive traversal of `self`.
            let node = unsafe { &mut *node_ptr };

            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));

            if let Some(front) = &mut node.front {
                stack.push(front.as_mut() as *mut BspNode);
            }
            if let Some(back) = &mut node.back {
                stack.push(back.as_mut() as *mut BspNode);
            }
        }
    }

    /// Collects all polygons in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            if let Some(front) = &node.front {
                stack.push(front.as_ref());
            }
            if let Some(back) = &node.back {
                stack.push(back.as_ref());
            }
        }

        result
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Iterative drop; a deep tree would otherwise recurse once per
        // level.
        let mut stack = Vec::new();
        if let Some(front) = self.front.take() {
            stack.push(front);
        }
        if let Some(back) = self.back.take() {
            stack.push(back);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(front) = node.front.take() {
                stack.push(front);
            }
            if let Some(back) = node.back.take() {
                stack.push(back);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspNode::new(vec![]);
        assert!(tree.all_polygons().is_empty());
    }

    #[test]
    fn test_bsp_keeps_all_polygons() {
        let tree = BspNode::new(vec![triangle(0.0), triangle(1.0), triangle(-1.0)]);
        assert_eq!(tree.all_polygons().len(), 3);
    }

    #[test]
    fn test_bsp_invert_flips_normals() {
        let poly = triangle(0.0);
        let normal = poly.plane().normal;

        let mut tree = BspNode::new(vec![poly]);
        tree.invert();

        let inverted = tree.all_polygons()[0].plane().normal;
        assert!((normal + inverted).length() < 1e-9);
    }

    #[test]
    fn test_bsp_clip_keeps_front() {
        let tree = BspNode::new(vec![triangle(0.0)]);
        let kept = tree.clip_polygons(vec![triangle(1.0)]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_bsp_clip_discards_back() {
        let tree = BspNode::new(vec![triangle(0.0)]);
        let kept = tree.clip_polygons(vec![triangle(-1.0)]);
        assert!(kept.is_empty());
    }
}
