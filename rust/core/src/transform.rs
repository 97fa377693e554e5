// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex compression transform
//!
//! CityJSON stores vertices as integer triples. The real-world position of a
//! vertex is `vertex * scale + translate`, applied per axis.

use serde::{Deserialize, Serialize};

/// A quantized vertex as stored in the document's `vertices` array.
pub type Vertex = [i64; 3];

/// Scale/translate pair used to decompress vertex coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Per-axis scale factor
    pub scale: [f64; 3],
    /// Per-axis offset added after scaling
    pub translate: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0, 1.0],
            translate: [0.0, 0.0, 0.0],
        }
    }
}

impl Transform {
    /// Create a transform from explicit scale and translate vectors
    #[inline]
    pub fn new(scale: [f64; 3], translate: [f64; 3]) -> Self {
        Self { scale, translate }
    }

    /// Check if this transform leaves coordinates unchanged
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.scale == [1.0, 1.0, 1.0] && self.translate == [0.0, 0.0, 0.0]
    }

    /// Decompress a vertex into real-world `(x, y, z)` coordinates
    #[inline]
    pub fn apply(&self, vertex: &Vertex) -> (f64, f64, f64) {
        (
            vertex[0] as f64 * self.scale[0] + self.translate[0],
            vertex[1] as f64 * self.scale[1] + self.translate[1],
            vertex[2] as f64 * self.scale[2] + self.translate[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_identity() {
        let transform = Transform::default();
        assert!(transform.is_identity());
        assert_eq!(transform.apply(&[3, -4, 5]), (3.0, -4.0, 5.0));
    }

    #[test]
    fn apply_scale_and_translate() {
        let transform = Transform::new([0.001, 0.001, 0.001], [85000.0, 446000.0, 50.0]);
        let (x, y, z) = transform.apply(&[100, 200, 300]);

        assert_relative_eq!(x, 85000.1, epsilon = 1e-9);
        assert_relative_eq!(y, 446000.2, epsilon = 1e-9);
        assert_relative_eq!(z, 50.3, epsilon = 1e-9);
    }

    #[test]
    fn deserialize_from_document_member() {
        let json = r#"{"scale": [0.01, 0.01, 0.01], "translate": [1.0, 2.0, 3.0]}"#;
        let transform: Transform = serde_json::from_str(json).unwrap();

        assert_eq!(transform.scale, [0.01, 0.01, 0.01]);
        assert_eq!(transform.translate, [1.0, 2.0, 3.0]);
        assert!(!transform.is_identity());
    }
}
