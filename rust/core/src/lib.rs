// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CityRoof Core
//!
//! CityJSON document model used by the CityRoof pipeline.
//!
//! ## Overview
//!
//! - **Document model**: [`CityModel`], [`CityObject`] and the closed
//!   [`Geometry`] enum (`MultiSurface`, `Solid`, everything else kept raw)
//! - **Lossless round trip**: members the pipeline does not model are
//!   preserved in flattened catch-all maps
//! - **Lenient semantics**: [`Semantics`] lookups resolve every malformed or
//!   missing label to `None`
//! - **Vertex compression**: [`Transform`] with identity default
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cityroof_core::CityModel;
//!
//! let model = CityModel::from_json_str(&content)?;
//! for (id, object) in &model.city_objects {
//!     println!("{}: {} geometries", id, object.geometries().len());
//! }
//! ```

pub mod city_object;
pub mod error;
pub mod geometry;
pub mod model;
pub mod semantics;
pub mod transform;

pub use city_object::CityObject;
pub use error::{Error, Result};
pub use geometry::{Face, Geometry, MultiSurface, Ring, Shell, Solid};
pub use model::{CityModel, CITY_OBJECTS_KEY, VERTICES_KEY};
pub use semantics::{FacePosition, Semantics, GROUND_SURFACE, ROOF_SURFACE, WALL_SURFACE};
pub use transform::{Transform, Vertex};
