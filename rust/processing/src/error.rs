// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the processing pipeline.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort processing of a whole document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a usable CityJSON document.
    #[error(transparent)]
    Document(#[from] cityroof_core::Error),

    /// A roof face of this object references a vertex that does not exist.
    #[error("CityObject '{id}': {source}")]
    Geometry {
        id: String,
        #[source]
        source: cityroof_geometry::Error,
    },
}

impl Error {
    /// True when the document itself is structurally unusable.
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}
