// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic surface labels attached to a geometry.
//!
//! A semantics block holds a table of surface records (`surfaces`) and an
//! index structure (`values`) whose nesting mirrors the geometry's faces:
//! a flat array for a MultiSurface, one array per shell for a Solid. Both
//! members are kept as raw JSON so that partially annotated or malformed
//! blocks survive a round trip; every lookup goes through the accessors
//! below, which report a missing label as `None` and never fail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label of roof polygons.
pub const ROOF_SURFACE: &str = "RoofSurface";
/// Label of wall polygons.
pub const WALL_SURFACE: &str = "WallSurface";
/// Label of ground polygons.
pub const GROUND_SURFACE: &str = "GroundSurface";

/// Position of a face inside a geometry's boundary nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacePosition {
    /// Flat face index of a MultiSurface.
    Surface(usize),
    /// `(shell, face)` pair of a Solid.
    Shell { shell: usize, face: usize },
}

/// Semantics block of a single geometry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Semantics {
    /// Surface records, each expected to carry a `type` string.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub surfaces: Value,

    /// Per-face indices into `surfaces`; `null` entries mean "no label".
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub values: Value,

    /// Any other members, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Semantics {
    /// Build a block from label strings and a values structure.
    pub fn new<S: AsRef<str>>(surface_types: &[S], values: Value) -> Self {
        let surfaces = surface_types
            .iter()
            .map(|t| serde_json::json!({ "type": t.as_ref() }))
            .collect();

        Self {
            surfaces: Value::Array(surfaces),
            values,
            extra: Map::new(),
        }
    }

    /// Number of entries in the surface table.
    pub fn surface_count(&self) -> usize {
        self.surfaces.as_array().map_or(0, Vec::len)
    }

    /// `type` of the surface record at `index`.
    pub fn surface_type(&self, index: usize) -> Option<&str> {
        self.surfaces.as_array()?.get(index)?.get("type")?.as_str()
    }

    /// Label of face `face` in a MultiSurface (`values[face]`).
    pub fn multi_surface_label(&self, face: usize) -> Option<&str> {
        let index = self.values.as_array()?.get(face).and_then(as_label_index)?;
        self.surface_type(index)
    }

    /// Label of face `face` of shell `shell` in a Solid (`values[shell][face]`).
    ///
    /// A `values` array shorter than the shell count, or a shell entry that
    /// is not an array, yields `None` like any other missing label.
    pub fn solid_label(&self, shell: usize, face: usize) -> Option<&str> {
        let index = self
            .values
            .as_array()?
            .get(shell)?
            .as_array()?
            .get(face)
            .and_then(as_label_index)?;
        self.surface_type(index)
    }

    /// Label at a face position, dispatching on the nesting kind.
    pub fn label_at(&self, position: FacePosition) -> Option<&str> {
        match position {
            FacePosition::Surface(face) => self.multi_surface_label(face),
            FacePosition::Shell { shell, face } => self.solid_label(shell, face),
        }
    }
}

/// Surface-table index stored at a `values` position (non-negative integers only).
#[inline]
fn as_label_index(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|i| usize::try_from(i).ok())
}
