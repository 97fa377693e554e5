// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// Tools for processing CityJSON files
#[derive(clap::Parser, Debug)]
#[command(name = "cityroof", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Add a `total_area_roof` attribute (sum of all RoofSurface areas) to every CityObject
    Roofarea(RoofareaArgs),
}

#[derive(clap::Args, Debug)]
pub struct RoofareaArgs {
    /// Path to input CityJSON file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Path to output file, defaults to overwriting the input
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Report progress and the first few results
    #[arg(short, long)]
    pub verbose: bool,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    pub compact: bool,

    /// Process objects on a single thread
    #[arg(long)]
    pub sequential: bool,
}
