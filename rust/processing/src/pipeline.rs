// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-document roof area pipeline
//!
//! Every CityObject is visited once and receives its own
//! `total_area_roof` attribute. Objects share only the read-only vertex list
//! and transform, so the per-object work runs on the rayon pool when
//! [`ProcessOptions::parallel`] is set; results are identical either way.

use std::time::Instant;

use cityroof_core::{CityModel, CityObject, Transform, Vertex};
use cityroof_geometry::roof_area;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::stats::{ObjectSummary, ProcessingStats};

/// Attribute written on every CityObject
pub const ROOF_AREA_ATTRIBUTE: &str = "total_area_roof";

/// Pipeline switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Spread objects over the rayon thread pool
    pub parallel: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ProcessOptions {
    /// Options for a single-threaded run
    pub fn sequential() -> Self {
        Self { parallel: false }
    }
}

/// A model with roof areas attached, plus run statistics
#[derive(Debug, Clone)]
pub struct ProcessedModel {
    pub model: CityModel,
    pub stats: ProcessingStats,
}

impl ProcessedModel {
    /// Roof area of the first `limit` objects in document order
    pub fn summaries(&self, limit: usize) -> Vec<ObjectSummary> {
        self.model
            .city_objects
            .iter()
            .take(limit)
            .map(|(id, object)| ObjectSummary {
                id: id.clone(),
                object_type: object.object_type.clone(),
                total_area_roof: object
                    .attribute(ROOF_AREA_ATTRIBUTE)
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0),
            })
            .collect()
    }

    /// Unwrap the processed model
    pub fn into_model(self) -> CityModel {
        self.model
    }
}

/// Parse a CityJSON document and attach roof areas.
pub fn process_json_str(content: &str, options: &ProcessOptions) -> Result<ProcessedModel> {
    tracing::debug!(content_size = content.len(), "Parsing CityJSON document");
    let model = CityModel::from_json_str(content)?;
    process_model(model, options)
}

/// Parse CityJSON bytes and attach roof areas.
pub fn process_slice(bytes: &[u8], options: &ProcessOptions) -> Result<ProcessedModel> {
    tracing::debug!(content_size = bytes.len(), "Parsing CityJSON document");
    let model = CityModel::from_slice(bytes)?;
    process_model(model, options)
}

/// Attach `total_area_roof` to every object of `model`.
///
/// The first out-of-range vertex reference aborts the run; the partially
/// updated model is dropped with the error.
pub fn process_model(mut model: CityModel, options: &ProcessOptions) -> Result<ProcessedModel> {
    let start = Instant::now();
    let transform = model.transform();

    tracing::info!(
        objects = model.object_count(),
        vertices = model.vertices.len(),
        parallel = options.parallel,
        "Starting roof area computation"
    );

    let CityModel {
        city_objects,
        vertices,
        ..
    } = &mut model;
    let vertices: &[Vertex] = vertices;

    let areas: Vec<f64> = if options.parallel {
        city_objects
            .par_iter_mut()
            .map(|(id, object)| apply_roof_area(id, object, vertices, &transform))
            .collect::<Result<_>>()?
    } else {
        city_objects
            .iter_mut()
            .map(|(id, object)| apply_roof_area(id, object, vertices, &transform))
            .collect::<Result<_>>()?
    };

    let stats = ProcessingStats::from_areas(&areas, start.elapsed().as_millis() as u64);

    tracing::info!(
        objects = stats.object_count,
        objects_with_roof = stats.objects_with_roof,
        total_roof_area = stats.total_roof_area,
        processing_time_ms = stats.processing_time_ms,
        "Roof area computation complete"
    );

    Ok(ProcessedModel { model, stats })
}

fn apply_roof_area(
    id: &str,
    object: &mut CityObject,
    vertices: &[Vertex],
    transform: &Transform,
) -> Result<f64> {
    let area = roof_area(object, vertices, transform).map_err(|source| Error::Geometry {
        id: id.to_string(),
        source,
    })?;

    tracing::debug!(id = %id, object_type = %object.object_type, area, "Roof area");
    object.set_attribute(ROOF_AREA_ATTRIBUTE, area);

    Ok(area)
}
