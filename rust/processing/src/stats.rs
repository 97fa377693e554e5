// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run statistics and per-object summaries

/// Aggregate figures for one processed document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingStats {
    pub object_count: usize,
    /// Objects whose roof area is strictly positive
    pub objects_with_roof: usize,
    pub total_roof_area: f64,
    pub processing_time_ms: u64,
}

impl ProcessingStats {
    pub(crate) fn from_areas(areas: &[f64], processing_time_ms: u64) -> Self {
        Self {
            object_count: areas.len(),
            objects_with_roof: areas.iter().filter(|&&area| area > 0.0).count(),
            total_roof_area: areas.iter().sum(),
            processing_time_ms,
        }
    }
}

/// Roof area of a single object, for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSummary {
    pub id: String,
    pub object_type: String,
    pub total_area_roof: f64,
}
