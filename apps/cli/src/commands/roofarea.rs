// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cityroof_processing::{process_slice, ProcessOptions, ProcessedModel};

use crate::cli::RoofareaArgs;
use crate::error::CliError;

/// Objects listed individually in the verbose report
const REPORT_LIMIT: usize = 3;

pub fn run(args: &RoofareaArgs) -> Result<()> {
    let input = args.input.as_path();
    check_input(input)?;
    let output = args.output.as_deref().unwrap_or(input);

    if args.verbose {
        println!("Processing: {}", input.display());
    }

    let content =
        fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;

    let options = ProcessOptions {
        parallel: !args.sequential,
    };
    let processed = process_slice(&content, &options)?;

    if args.verbose {
        for line in report_lines(&processed) {
            println!("{}", line);
        }
    }

    let json = processed
        .into_model()
        .to_json_string(!args.compact)
        .context("failed to serialize document")?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(output = %output.display(), "Output written");
    println!("✓ Output written to: {}", output.display());

    Ok(())
}

fn check_input(path: &Path) -> std::result::Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

fn report_lines(processed: &ProcessedModel) -> Vec<String> {
    let count = processed.stats.object_count;
    let mut lines = vec![format!("✓ Processed {} CityObjects", count)];

    for summary in processed.summaries(REPORT_LIMIT) {
        lines.push(format!(
            "  {} ({}): {:.2} m²",
            summary.id, summary.object_type, summary.total_area_roof
        ));
    }
    if count > REPORT_LIMIT {
        lines.push(format!("  ... and {} more objects", count - REPORT_LIMIT));
    }

    lines
}
