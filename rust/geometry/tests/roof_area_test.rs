// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Roof areas computed from parsed CityJSON documents
use approx::assert_relative_eq;
use cityroof_core::CityModel;
use cityroof_geometry::{labelled_area, roof_area, Error};

/// Gable-roof house: 10 x 8 m footprint, 3 m eaves, 5 m ridge running along X.
/// Quantized to centimetres around a real-world origin.
const GABLE_HOUSE: &str = r#"{
  "type": "CityJSON",
  "version": "2.0",
  "transform": {"scale": [0.01, 0.01, 0.01], "translate": [85000.0, 446000.0, 0.0]},
  "CityObjects": {
    "house-solid": {
      "type": "Building",
      "attributes": {"roofType": "gable"},
      "geometry": [{
        "type": "Solid",
        "lod": "2.2",
        "boundaries": [[
          [[0, 3, 2, 1]],
          [[0, 1, 5, 4]],
          [[2, 3, 7, 6]],
          [[1, 2, 6, 9, 5]],
          [[3, 0, 4, 8, 7]],
          [[4, 5, 9, 8]],
          [[8, 9, 6, 7]]
        ]],
        "semantics": {
          "surfaces": [
            {"type": "GroundSurface"},
            {"type": "WallSurface"},
            {"type": "RoofSurface"}
          ],
          "values": [[0, 1, 1, 1, 1, 2, 2]]
        }
      }]
    },
    "house-surfaces": {
      "type": "Building",
      "geometry": [{
        "type": "MultiSurface",
        "lod": "2.2",
        "boundaries": [
          [[4, 5, 9, 8]],
          [[8, 9, 6, 7]],
          [[0, 1, 5, 4]]
        ],
        "semantics": {
          "surfaces": [{"type": "RoofSurface"}, {"type": "WallSurface"}],
          "values": [0, 0, 1]
        }
      }]
    },
    "unlabelled": {
      "type": "Building",
      "geometry": [{
        "type": "MultiSurface",
        "lod": "1",
        "boundaries": [[[4, 5, 9, 8]], [[8, 9, 6, 7]]]
      }]
    },
    "annex": {
      "type": "BuildingPart",
      "parents": ["house-solid"]
    }
  },
  "vertices": [
    [0, 0, 0], [1000, 0, 0], [1000, 800, 0], [0, 800, 0],
    [0, 0, 300], [1000, 0, 300], [1000, 800, 300], [0, 800, 300],
    [0, 400, 500], [1000, 400, 500]
  ]
}"#;

/// One roof slope: 10 m long, rising 2 m over 4 m horizontal run.
fn slope_area() -> f64 {
    10.0 * (4.0_f64 * 4.0 + 2.0 * 2.0).sqrt()
}

#[test]
fn gable_roof_from_solid() {
    let model = CityModel::from_json_str(GABLE_HOUSE).expect("parse failed");
    let transform = model.transform();
    let object = model.object("house-solid").unwrap();

    let area = roof_area(object, &model.vertices, &transform).unwrap();
    assert_relative_eq!(area, 2.0 * slope_area(), epsilon = 1e-6);
}

#[test]
fn gable_roof_from_multi_surface_matches_solid() {
    let model = CityModel::from_json_str(GABLE_HOUSE).expect("parse failed");
    let transform = model.transform();

    let solid = roof_area(model.object("house-solid").unwrap(), &model.vertices, &transform).unwrap();
    let surfaces =
        roof_area(model.object("house-surfaces").unwrap(), &model.vertices, &transform).unwrap();

    assert_relative_eq!(solid, surfaces, epsilon = 1e-6);
}

#[test]
fn walls_include_gable_pentagons() {
    let model = CityModel::from_json_str(GABLE_HOUSE).expect("parse failed");
    let transform = model.transform();
    let object = model.object("house-solid").unwrap();

    // Two 10 x 3 long walls, two gable ends of 8 x 3 plus a 8 x 2 / 2 triangle
    let expected = 2.0 * 30.0 + 2.0 * (24.0 + 8.0);
    let walls = labelled_area(object, "WallSurface", &model.vertices, &transform).unwrap();
    assert_relative_eq!(walls, expected, epsilon = 1e-6);

    let ground = labelled_area(object, "GroundSurface", &model.vertices, &transform).unwrap();
    assert_relative_eq!(ground, 80.0, epsilon = 1e-6);
}

#[test]
fn objects_without_roof_labels() {
    let model = CityModel::from_json_str(GABLE_HOUSE).expect("parse failed");
    let transform = model.transform();

    for id in ["unlabelled", "annex"] {
        let area = roof_area(model.object(id).unwrap(), &model.vertices, &transform).unwrap();
        assert_eq!(area, 0.0, "{} should have no roof area", id);
    }
}

#[test]
fn truncated_vertex_list_is_an_error() {
    let mut model = CityModel::from_json_str(GABLE_HOUSE).expect("parse failed");
    model.vertices.truncate(9);
    let transform = model.transform();

    let err = roof_area(model.object("house-solid").unwrap(), &model.vertices, &transform)
        .unwrap_err();
    assert!(matches!(err, Error::VertexOutOfRange { index: 9, len: 9 }));
}
