// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic surface walker
//!
//! Visits every face of a CityObject's geometries, looks up its semantic
//! label and sums the area of the faces carrying a requested label. The
//! label lookup is lenient (see [`cityroof_core::Semantics`]); only vertex
//! resolution can fail.

use cityroof_core::{CityObject, Geometry, Transform, Vertex, ROOF_SURFACE};

use crate::area::surface_area;
use crate::error::Result;

/// Total area of all `RoofSurface` faces of an object.
///
/// Objects without geometry, without semantics, or without roof faces give
/// exactly `0.0`.
pub fn roof_area(object: &CityObject, vertices: &[Vertex], transform: &Transform) -> Result<f64> {
    labelled_area(object, ROOF_SURFACE, vertices, transform)
}

/// Total area of every face labelled `label`, summed over all geometries.
pub fn labelled_area(
    object: &CityObject,
    label: &str,
    vertices: &[Vertex],
    transform: &Transform,
) -> Result<f64> {
    object
        .geometries()
        .iter()
        .try_fold(0.0, |total, geometry| {
            Ok(total + geometry_labelled_area(geometry, label, vertices, transform)?)
        })
}

/// Area of faces labelled `label` within a single geometry.
///
/// Geometry kinds other than MultiSurface and Solid contribute `0.0`.
pub fn geometry_labelled_area(
    geometry: &Geometry,
    label: &str,
    vertices: &[Vertex],
    transform: &Transform,
) -> Result<f64> {
    let Some(semantics) = geometry.semantics() else {
        return Ok(0.0);
    };

    let mut total = 0.0;
    for (position, face) in geometry.faces() {
        if semantics.label_at(position) == Some(label) {
            total += surface_area(face, vertices, transform)?;
        }
    }

    Ok(total)
}
