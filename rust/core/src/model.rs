// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityJSON document root
//!
//! Only the members the roof-area pipeline needs are typed. Every other
//! top-level member (`type`, `version`, `metadata`, `appearance`, ...) is
//! carried through [`CityModel::extra`] so that writing the model back
//! changes nothing but the attributes explicitly set on objects.
//!
//! Objects and every JSON map keep document order. The typed members of a
//! record are written first, followed by its untyped members.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::city_object::CityObject;
use crate::error::{Error, Result};
use crate::transform::{Transform, Vertex};

/// Top-level member holding the object mapping
pub const CITY_OBJECTS_KEY: &str = "CityObjects";
/// Top-level member holding the global vertex list
pub const VERTICES_KEY: &str = "vertices";

/// A parsed CityJSON document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CityModel {
    #[serde(rename = "CityObjects")]
    pub city_objects: IndexMap<String, CityObject>,

    pub vertices: Vec<Vertex>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CityModel {
    /// Parse a document from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Parse a document from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Build a model from an already-parsed JSON value.
    ///
    /// The two required members are checked before any typed decoding so a
    /// missing `CityObjects` or `vertices` is reported as
    /// [`Error::MissingKey`] rather than a generic shape error.
    pub fn from_value(value: Value) -> Result<Self> {
        let root = value.as_object().ok_or(Error::NotAnObject)?;

        for key in [CITY_OBJECTS_KEY, VERTICES_KEY] {
            if !root.contains_key(key) {
                return Err(Error::MissingKey(key));
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Serialize the document; `pretty` uses two-space indentation
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Effective vertex transform (identity when the document has none)
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform.unwrap_or_default()
    }

    /// Number of CityObjects
    #[inline]
    pub fn object_count(&self) -> usize {
        self.city_objects.len()
    }

    /// Look up an object by identifier
    pub fn object(&self, id: &str) -> Option<&CityObject> {
        self.city_objects.get(id)
    }
}
