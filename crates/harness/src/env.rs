// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by the harness are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::ffi::OsString;
use std::path::PathBuf;

/// `IMAGE_OPTIM_PACK_PATH` — Directory of bundled optimizer binaries.
pub fn pack_path() -> Option<PathBuf> {
    std::env::var_os(names::IMAGE_OPTIM_PACK_PATH)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `PATH` — Executable search path inherited from the caller.
pub fn search_path() -> Option<OsString> {
    std::env::var_os(names::PATH)
}

/// `OPTIM_HARNESS_LOG` — `tracing` filter directives for the binary.
pub fn log_filter() -> Option<String> {
    std::env::var(names::OPTIM_HARNESS_LOG).ok()
}

/// `OPTIM_HARNESS_STRICT_PARSE` — Fail on unparseable compare output.
pub fn strict_parse() -> bool {
    var_flag(names::OPTIM_HARNESS_STRICT_PARSE)
}

/// `XDG_CONFIG_HOME` — Base directory for user configuration.
pub fn xdg_config_home() -> Option<PathBuf> {
    std::env::var_os(names::XDG_CONFIG_HOME)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `HOME` — User's home directory.
pub fn home() -> Option<PathBuf> {
    std::env::var_os(names::HOME).map(PathBuf::from)
}

fn var_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
