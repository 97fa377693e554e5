// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon area in 3D
//!
//! Areas come from the Newell normal: for a planar ring in any orientation
//! its magnitude is twice the enclosed area. The ring is treated as cyclic,
//! so repeating the first point at the end does not change the result.

use cityroof_core::{Transform, Vertex};

use crate::coords::resolve_ring;
use crate::error::Result;
use crate::{Point3, Vector3};

/// Rings with fewer points than this enclose no area.
pub const MIN_RING_POINTS: usize = 3;

/// Unnormalized polygon normal using Newell's method.
///
/// The direction follows the right-hand rule relative to the winding order.
pub fn newell_normal(points: &[Point3<f64>]) -> Vector3<f64> {
    let n = points.len();
    let mut normal = Vector3::<f64>::zeros();

    for i in 0..n {
        let current = &points[i];
        let next = &points[(i + 1) % n];

        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    normal
}

/// Area enclosed by a ring of points; always non-negative.
///
/// Fewer than three points yield exactly `0.0`.
pub fn ring_area(points: &[Point3<f64>]) -> f64 {
    if points.len() < MIN_RING_POINTS {
        return 0.0;
    }
    0.5 * newell_normal(points).norm()
}

/// Area of a face: outer ring minus every hole.
///
/// Hole rings with fewer than three indices are skipped; a degenerate outer
/// ring makes the whole face `0.0` without looking at its holes. No attempt
/// is made to keep the result non-negative when holes are larger than the
/// outer ring.
pub fn surface_area(rings: &[Vec<usize>], vertices: &[Vertex], transform: &Transform) -> Result<f64> {
    let Some((outer, holes)) = rings.split_first() else {
        return Ok(0.0);
    };
    if outer.len() < MIN_RING_POINTS {
        return Ok(0.0);
    }

    let mut area = indexed_ring_area(outer, vertices, transform)?;
    for hole in holes {
        area -= indexed_ring_area(hole, vertices, transform)?;
    }

    Ok(area)
}

#[inline]
fn indexed_ring_area(ring: &[usize], vertices: &[Vertex], transform: &Transform) -> Result<f64> {
    if ring.len() < MIN_RING_POINTS {
        return Ok(0.0);
    }
    let points = resolve_ring(ring, vertices, transform)?;
    Ok(ring_area(&points))
}
