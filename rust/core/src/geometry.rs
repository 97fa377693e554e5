// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry records of a CityObject
//!
//! Boundaries are nested arrays of indices into the document's global vertex
//! list:
//!
//! - MultiSurface: `boundaries[face][ring][vertex]`
//! - Solid: `boundaries[shell][face][ring][vertex]`
//!
//! Ring 0 of a face is its outer boundary, further rings are holes. Geometry
//! kinds other than these two are kept as raw JSON.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::semantics::{FacePosition, Semantics};

/// Closed loop of vertex indices. The closing edge back to the first index is implicit.
pub type Ring = Vec<usize>;
/// Polygon: outer ring followed by hole rings.
pub type Face = Vec<Ring>;
/// Faces bounding one closed volume of a Solid.
pub type Shell = Vec<Face>;

/// Surface collection without volumetric structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiSurface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lod: Option<Value>,

    pub boundaries: Vec<Face>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantics: Option<Semantics>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Volume bounded by an exterior shell and optional interior shells
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lod: Option<Value>,

    pub boundaries: Vec<Shell>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantics: Option<Semantics>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a CityObject's `geometry` array.
///
/// Dispatch happens on the `type` member. Unrecognised kinds (MultiSolid,
/// CompositeSolid, GeometryInstance, ...) land in [`Geometry::Other`] with
/// their JSON untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    MultiSurface(MultiSurface),
    Solid(Solid),
    Other(Value),
}

/// Borrowed view used to write the `type` tag back in front of a typed record.
#[derive(Serialize)]
#[serde(tag = "type")]
enum TaggedRef<'a> {
    MultiSurface(&'a MultiSurface),
    Solid(&'a Solid),
}

impl Geometry {
    /// Value of the `type` tag.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Geometry::MultiSurface(_) => Some("MultiSurface"),
            Geometry::Solid(_) => Some("Solid"),
            Geometry::Other(value) => value.get("type").and_then(Value::as_str),
        }
    }

    /// Semantics block, if the geometry kind is recognised and carries one.
    pub fn semantics(&self) -> Option<&Semantics> {
        match self {
            Geometry::MultiSurface(g) => g.semantics.as_ref(),
            Geometry::Solid(g) => g.semantics.as_ref(),
            Geometry::Other(_) => None,
        }
    }

    /// Iterate over every face with its position in the boundary nesting.
    ///
    /// Unrecognised geometry kinds yield no faces.
    pub fn faces(&self) -> Box<dyn Iterator<Item = (FacePosition, &Face)> + '_> {
        match self {
            Geometry::MultiSurface(g) => Box::new(
                g.boundaries
                    .iter()
                    .enumerate()
                    .map(|(face, rings)| (FacePosition::Surface(face), rings)),
            ),
            Geometry::Solid(g) => {
                Box::new(g.boundaries.iter().enumerate().flat_map(|(shell, faces)| {
                    faces
                        .iter()
                        .enumerate()
                        .map(move |(face, rings)| (FacePosition::Shell { shell, face }, rings))
                }))
            }
            Geometry::Other(_) => Box::new(std::iter::empty()),
        }
    }

    /// Total number of faces across all shells.
    pub fn face_count(&self) -> usize {
        match self {
            Geometry::MultiSurface(g) => g.boundaries.len(),
            Geometry::Solid(g) => g.boundaries.iter().map(Vec::len).sum(),
            Geometry::Other(_) => 0,
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Geometry::MultiSurface(g) => TaggedRef::MultiSurface(g).serialize(serializer),
            Geometry::Solid(g) => TaggedRef::Solid(g).serialize(serializer),
            Geometry::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;

        let kind = match value.get("type").and_then(Value::as_str) {
            Some("MultiSurface") => GeometryKind::MultiSurface,
            Some("Solid") => GeometryKind::Solid,
            _ => return Ok(Geometry::Other(value)),
        };

        // A semantics member that is not an object carries no labels; it is
        // moved to the catch-all so it is written back as it was.
        let mut raw_semantics = None;
        if let Value::Object(map) = &mut value {
            map.remove("type");
            if map.get(SEMANTICS_KEY).is_some_and(|s| !s.is_object()) {
                raw_semantics = map.remove(SEMANTICS_KEY);
            }
        }

        match kind {
            GeometryKind::MultiSurface => {
                let mut geometry: MultiSurface = serde_json::from_value(value)
                    .map_err(|e| D::Error::custom(format!("invalid MultiSurface: {e}")))?;
                restore_raw_semantics(&mut geometry.extra, raw_semantics);
                Ok(Geometry::MultiSurface(geometry))
            }
            GeometryKind::Solid => {
                let mut geometry: Solid = serde_json::from_value(value)
                    .map_err(|e| D::Error::custom(format!("invalid Solid: {e}")))?;
                restore_raw_semantics(&mut geometry.extra, raw_semantics);
                Ok(Geometry::Solid(geometry))
            }
        }
    }
}

const SEMANTICS_KEY: &str = "semantics";

fn restore_raw_semantics(extra: &mut Map<String, Value>, raw: Option<Value>) {
    if let Some(raw) = raw {
        extra.insert(SEMANTICS_KEY.to_string(), raw);
    }
}

enum GeometryKind {
    MultiSurface,
    Solid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatch_on_type_tag() {
        let multi: Geometry = serde_json::from_value(json!({
            "type": "MultiSurface",
            "lod": "2.2",
            "boundaries": [[[0, 1, 2, 3]], [[4, 5, 6]]]
        }))
        .unwrap();
        let solid: Geometry = serde_json::from_value(json!({
            "type": "Solid",
            "lod": 2,
            "boundaries": [[[[0, 1, 2]], [[1, 2, 3]]], [[[4, 5, 6]]]]
        }))
        .unwrap();

        assert!(matches!(multi, Geometry::MultiSurface(_)));
        assert_eq!(multi.face_count(), 2);
        assert!(matches!(solid, Geometry::Solid(_)));
        assert_eq!(solid.face_count(), 3);
        assert!(multi.semantics().is_none());
    }

    #[test]
    fn unknown_kind_is_kept_verbatim() {
        let source = json!({
            "type": "MultiSolid",
            "lod": "1",
            "boundaries": [[[[[0, 1, 2]]]]]
        });
        let geometry: Geometry = serde_json::from_value(source.clone()).unwrap();

        assert_eq!(geometry.type_name(), Some("MultiSolid"));
        assert_eq!(geometry.faces().count(), 0);
        assert_eq!(serde_json::to_value(&geometry).unwrap(), source);
    }

    #[test]
    fn typed_round_trip_restores_tag() {
        let source = json!({
            "type": "Solid",
            "lod": "2",
            "boundaries": [[[[0, 1, 2]]]],
            "semantics": {"surfaces": [{"type": "RoofSurface"}], "values": [[0]]},
            "material": {"irradiation": {"values": [[0]]}}
        });
        let geometry: Geometry = serde_json::from_value(source.clone()).unwrap();

        match &geometry {
            Geometry::Solid(solid) => {
                assert!(!solid.extra.contains_key("type"));
                assert!(solid.extra.contains_key("material"));
            }
            other => panic!("expected Solid, got {:?}", other),
        }
        assert_eq!(serde_json::to_value(&geometry).unwrap(), source);
    }

    #[test]
    fn face_positions() {
        let solid: Geometry = serde_json::from_value(json!({
            "type": "Solid",
            "boundaries": [[[[0, 1, 2]], [[1, 2, 3]]], [[[4, 5, 6]]]]
        }))
        .unwrap();

        let positions: Vec<FacePosition> = solid.faces().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            vec![
                FacePosition::Shell { shell: 0, face: 0 },
                FacePosition::Shell { shell: 0, face: 1 },
                FacePosition::Shell { shell: 1, face: 0 },
            ]
        );
    }

    #[test]
    fn non_object_semantics_is_unlabelled() {
        for raw in [json!([]), json!("none"), json!(5), json!(null)] {
            let source = json!({
                "type": "MultiSurface",
                "boundaries": [[[0, 1, 2]]],
                "semantics": raw
            });
            let geometry: Geometry = serde_json::from_value(source.clone()).unwrap();

            assert!(geometry.semantics().is_none());
            assert_eq!(serde_json::to_value(&geometry).unwrap(), source);
        }

        let solid: Geometry = serde_json::from_value(json!({
            "type": "Solid",
            "boundaries": [[[[0, 1, 2]]]],
            "semantics": [[0]]
        }))
        .unwrap();
        assert!(matches!(solid, Geometry::Solid(_)));
        assert!(solid.semantics().is_none());
    }

    #[test]
    fn malformed_boundaries_are_rejected() {
        let result: Result<Geometry, _> = serde_json::from_value(json!({
            "type": "MultiSurface",
            "boundaries": [[0, 1, 2]]
        }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid MultiSurface"));
    }
}
