//! # Shell Generator
//!
//! Places oriented torus primitives across concentric radii, plus the
//! optional central sphere.

use crate::directions::great_circle_directions;
use crate::orient::{rotation_between, REFERENCE_AXIS};
use config::ShellConfig;
use glam::DVec3;
use rayon::prelude::*;
use rind_mesh::primitives::{create_sphere, create_torus};
use rind_mesh::{Mesh, MeshError};
use tracing::debug;

/// Generates every part of the model as an independent mesh, in a fixed
/// deterministic order.
///
/// The central sphere (when enabled) comes first, followed by one torus
/// per (shell, direction) pair: shell `i` sits at radius
/// `base_radius + i * shell_spacing`, and within a shell the tori follow
/// the direction-set order. Output length is
/// `central_sphere as usize + shell_count * 9`.
///
/// Each placement is independent, so the tori are built in parallel and
/// collected back into the fixed order before combination.
pub fn generate_parts(config: &ShellConfig) -> Result<Vec<Mesh>, MeshError> {
    let directions = great_circle_directions();

    let mut placements: Vec<(f64, DVec3)> =
        Vec::with_capacity(config.shell_count as usize * directions.len());
    for i in 0..config.shell_count {
        let radius = config.base_radius + f64::from(i) * config.shell_spacing;
        for direction in directions {
            placements.push((radius, direction));
        }
    }

    let mut parts = Vec::with_capacity(placements.len() + 1);

    if config.central_sphere {
        debug!(
            radius = config.central_sphere_radius,
            "generating central sphere"
        );
        parts.push(create_sphere(
            config.central_sphere_radius,
            config.sphere_segments,
        )?);
    }

    debug!(
        shells = config.shell_count,
        rinds = placements.len(),
        "generating rind tori"
    );
    let rinds = placements
        .par_iter()
        .map(|&(radius, direction)| {
            let mut rind = create_torus(
                radius,
                config.rind_thickness,
                config.torus_major_segments,
                config.torus_minor_segments,
            )?;
            rind.transform(&rotation_between(REFERENCE_AXIS, direction));
            Ok(rind)
        })
        .collect::<Result<Vec<Mesh>, MeshError>>()?;

    parts.extend(rinds);
    Ok(parts)
}
