// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runtime configuration loaded from environment variables.

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker threads for parallel processing.
    pub worker_threads: usize,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            worker_threads: std::env::var("WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or_else(num_cpus::get),
            log_filter: std::env::var("CITYROOF_LOG").unwrap_or_else(|_| "warn".into()),
        }
    }

    /// Filter directive for the tracing subscriber.
    pub fn effective_log_filter(&self, verbose: bool) -> String {
        log_filter(std::env::var("RUST_LOG").ok(), &self.log_filter, verbose)
    }
}

/// `RUST_LOG` wins; otherwise verbose runs log pipeline progress at `info`.
fn log_filter(rust_log: Option<String>, base: &str, verbose: bool) -> String {
    match rust_log {
        Some(filter) => filter,
        None if verbose => format!("{},cityroof_processing=info,cityroof=info", base),
        None => base.to_string(),
    }
}
