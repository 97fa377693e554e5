// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input errors detected before the pipeline runs, and user-facing messages.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
}

/// One-line message printed after `Error: `.
pub fn describe(err: &anyhow::Error) -> String {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.to_string();
    }
    if let Some(pipeline_err) = err.downcast_ref::<cityroof_processing::Error>() {
        if pipeline_err.is_invalid_document() {
            return format!("Invalid CityJSON file: {}", pipeline_err);
        }
    }
    format!("{:#}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityroof_processing::{process_json_str, ProcessOptions};

    #[test]
    fn describe_missing_file() {
        let err = anyhow::Error::new(CliError::FileNotFound(PathBuf::from("model.city.json")));
        assert_eq!(describe(&err), "File not found: model.city.json");
    }

    #[test]
    fn describe_invalid_document() {
        let err = process_json_str("{\"CityObjects\": {}}", &ProcessOptions::default()).unwrap_err();
        let err = anyhow::Error::new(err);
        assert_eq!(describe(&err), "Invalid CityJSON file: missing 'vertices'");
    }

    #[test]
    fn describe_keeps_context_chain() {
        let err = anyhow::anyhow!("disk full").context("failed to write out.json");
        assert_eq!(describe(&err), "failed to write out.json: disk full");
    }
}
