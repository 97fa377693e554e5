// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityRoof Geometry Processing
//!
//! Vertex decompression, Newell polygon areas and semantic surface walking
//! for CityJSON geometries, using nalgebra for points and vectors.

pub mod area;
pub mod coords;
pub mod error;
pub mod walker;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use area::{newell_normal, ring_area, surface_area};
pub use coords::{resolve, resolve_ring, RingPoints};
pub use error::{Error, Result};
pub use walker::{geometry_labelled_area, labelled_area, roof_area};
