// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for CityJSON document handling.

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or writing a CityJSON document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required top-level member is absent.
    #[error("missing '{0}'")]
    MissingKey(&'static str),

    /// The document root is not a JSON object.
    #[error("document root must be a JSON object")]
    NotAnObject,

    /// Malformed JSON, or a member with the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
