// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup for the harness binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is up
//! to the binary (or a test that wants to see them).

use crate::env;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter when `OPTIM_HARNESS_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Filter directives: `--verbose` wins, then `OPTIM_HARNESS_LOG`, then the
/// default
pub fn filter_directives(verbose: bool, from_env: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    from_env
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install a stderr subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: bool) {
    let directives = filter_directives(verbose, env::log_filter());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
