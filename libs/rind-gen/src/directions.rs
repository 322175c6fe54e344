//! # Symmetry Directions
//!
//! The fixed set of unit vectors that orients the rinds of every shell.

use glam::DVec3;

/// Number of great-circle directions (octahedral symmetry).
pub const DIRECTION_COUNT: usize = 9;

/// Returns the 9 great-circle normals in a fixed order: the 3 coordinate
/// axes followed by the 6 face diagonals of the cube.
///
/// Every vector is normalized. The order is deterministic and reused for
/// every shell radius, giving each shell an identical angular layout.
///
/// # Example
///
/// ```rust
/// use rind_gen::directions::great_circle_directions;
///
/// let directions = great_circle_directions();
/// assert_eq!(directions.len(), 9);
/// assert!(directions.iter().all(|d| (d.length() - 1.0).abs() < 1e-6));
/// ```
pub fn great_circle_directions() -> [DVec3; DIRECTION_COUNT] {
    [
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 1.0, 0.0).normalize(),
        DVec3::new(1.0, -1.0, 0.0).normalize(),
        DVec3::new(1.0, 0.0, 1.0).normalize(),
        DVec3::new(1.0, 0.0, -1.0).normalize(),
        DVec3::new(0.0, 1.0, 1.0).normalize(),
        DVec3::new(0.0, 1.0, -1.0).normalize(),
    ]
}
