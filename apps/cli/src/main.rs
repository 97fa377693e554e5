// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CityRoof CLI - derived attributes for CityJSON files.
//!
//! # Commands
//!
//! - `cityroof roofarea <INPUT> [-o OUTPUT]` - add `total_area_roof` to every
//!   CityObject, overwriting the input unless an output path is given
//!
//! # Environment
//!
//! - `RUST_LOG` - tracing filter (takes precedence over everything else)
//! - `CITYROOF_LOG` - fallback filter, defaults to `warn`
//! - `WORKER_THREADS` - rayon pool size, defaults to the CPU count

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;

use cli::{Cli, Commands};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();

    let verbose = match &cli.command {
        Commands::Roofarea(args) => args.verbose,
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.effective_log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build_global()
    {
        tracing::warn!(error = %e, "Failed to configure rayon thread pool");
    }

    tracing::debug!(worker_threads = config.worker_threads, "Starting cityroof");

    let result = match &cli.command {
        Commands::Roofarea(args) => commands::roofarea::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {}", error::describe(&err));
            ExitCode::FAILURE
        }
    }
}
