// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup for the `sq` binary.
//!
//! Logs go to stderr so stdout stays parseable. `RUST_LOG` takes precedence
//! over the `-v` flag.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the log filter from `RUST_LOG` or the verbosity flag.
pub fn filter(verbose: bool) -> EnvFilter {
    env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
