// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex index resolution
//!
//! Turns boundary indices into real-world points using the document's global
//! vertex list and compression transform.

use cityroof_core::{Transform, Vertex};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::Point3;

/// Resolved ring, stack-allocated for typical building polygons
pub type RingPoints = SmallVec<[Point3<f64>; 8]>;

/// Resolve one vertex index into a real-world point.
///
/// Returns [`Error::VertexOutOfRange`] when `index` does not address
/// `vertices`; the index is never clamped.
#[inline]
pub fn resolve(index: usize, vertices: &[Vertex], transform: &Transform) -> Result<Point3<f64>> {
    let vertex = vertices.get(index).ok_or(Error::VertexOutOfRange {
        index,
        len: vertices.len(),
    })?;
    let (x, y, z) = transform.apply(vertex);
    Ok(Point3::new(x, y, z))
}

/// Resolve every index of a ring, failing on the first bad index
pub fn resolve_ring(ring: &[usize], vertices: &[Vertex], transform: &Transform) -> Result<RingPoints> {
    ring.iter()
        .map(|&index| resolve(index, vertices, transform))
        .collect()
}
