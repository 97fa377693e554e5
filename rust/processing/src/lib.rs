// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared roof area pipeline used by the CLI and library consumers.

pub mod error;
pub mod pipeline;
pub mod stats;

pub use error::{Error, Result};
pub use pipeline::{
    process_json_str, process_model, process_slice, ProcessOptions, ProcessedModel,
    ROOF_AREA_ATTRIBUTE,
};
pub use stats::{ObjectSummary, ProcessingStats};
