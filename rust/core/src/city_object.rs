// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityObject records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::Geometry;

/// A modeled object (Building, BuildingPart, Bridge, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CityObject {
    /// Object type tag, e.g. "Building"
    #[serde(rename = "type", default)]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<Geometry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,

    /// Members not modeled here (`parents`, `children`, `geographicalExtent`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CityObject {
    /// Create an object of the given type with no geometry
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            ..Self::default()
        }
    }

    /// Builder-style geometry append
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry.get_or_insert_with(Vec::new).push(geometry);
        self
    }

    /// Geometry entries, empty when the object has none
    #[inline]
    pub fn geometries(&self) -> &[Geometry] {
        self.geometry.as_deref().unwrap_or(&[])
    }

    /// Look up an attribute value
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.as_ref()?.get(key)
    }

    /// Set one attribute, creating the attribute map if needed.
    ///
    /// Other attributes are left untouched.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
    }
}
