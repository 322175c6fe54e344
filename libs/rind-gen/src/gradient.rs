//! # Radial Color Gradient
//!
//! Per-vertex colors interpolated over distance from the origin.

use config::constants::EPSILON;
use rind_mesh::Mesh;
use tracing::debug;

/// Attaches a color to every vertex by its distance from the origin.
///
/// Distances are normalized linearly between the closest and farthest
/// vertex; the `stops` are mapped to evenly spaced positions in [0, 1]
/// and each RGB channel is interpolated independently between the two
/// bracketing stops. The closest vertex receives exactly the first stop
/// and the farthest exactly the last.
///
/// Degenerate cases: an empty mesh is left untouched, and when every
/// vertex is equidistant (a single sphere) all vertices take the first
/// stop. Vertices and faces are never modified.
///
/// # Example
///
/// ```rust
/// use rind_gen::gradient::apply_radial_gradient;
/// use rind_mesh::primitives::create_torus;
///
/// let mut mesh = create_torus(1.0, 0.2, 16, 8).unwrap();
/// apply_radial_gradient(&mut mesh, &[[255, 255, 0], [128, 0, 128]]);
/// assert_eq!(mesh.colors().unwrap().len(), mesh.vertex_count());
/// ```
pub fn apply_radial_gradient(mesh: &mut Mesh, stops: &[[u8; 3]]) {
    if mesh.is_empty() || stops.is_empty() {
        return;
    }

    let radii: Vec<f64> = mesh.vertices().iter().map(|v| v.length()).collect();
    let min_radius = radii.iter().copied().fold(f64::INFINITY, f64::min);
    let max_radius = radii.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_radius - min_radius;

    debug!(
        vertices = radii.len(),
        min_radius, max_radius, "applying radial gradient"
    );

    let colors = radii
        .iter()
        .map(|&radius| {
            // Tessellated vertices on a common radius differ by float
            // noise, so the degeneracy test needs a real tolerance.
            let t = if range > EPSILON {
                (radius - min_radius) / range
            } else {
                // All vertices equidistant: pin everything to the first stop.
                0.0
            };
            sample(stops, t)
        })
        .collect();

    mesh.set_colors(colors);
}

/// Samples the gradient at normalized position `t`, clamped to [0, 1].
fn sample(stops: &[[u8; 3]], t: f64) -> [u8; 3] {
    let last = stops.len() - 1;
    if last == 0 {
        return stops[0];
    }

    let scaled = t.clamp(0.0, 1.0) * last as f64;
    let lower = (scaled.floor() as usize).min(last - 1);
    let fraction = scaled - lower as f64;

    let a = stops[lower];
    let b = stops[lower + 1];
    let mut color = [0u8; 3];
    for channel in 0..3 {
        let value = f64::from(a[channel]) + (f64::from(b[channel]) - f64::from(a[channel])) * fraction;
        color[channel] = value.round() as u8;
    }
    color
}
