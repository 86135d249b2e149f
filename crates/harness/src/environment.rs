// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process environment the harness runs external tools in.

use crate::env;
use crate::error::HarnessError;
use crate::paths::ConfigPaths;
use optim_cmd::CmdSpec;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Search path and config locations handed to every external tool.
///
/// Built once and passed explicitly; nothing here mutates the process
/// environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessEnv {
    search_path: OsString,
    config: ConfigPaths,
}

impl HarnessEnv {
    /// Environment for test runs: the bundled pack directory (if any) is
    /// searched first and config lookups are stubbed to the null device.
    pub fn for_tests() -> Result<Self, HarnessError> {
        Self::new(env::pack_path(), env::search_path(), ConfigPaths::null())
    }

    /// Prepend `pack` to `search_path`.
    pub fn new(
        pack: Option<PathBuf>,
        search_path: Option<OsString>,
        config: ConfigPaths,
    ) -> Result<Self, HarnessError> {
        let inherited = search_path.unwrap_or_default();
        let dirs = pack
            .into_iter()
            .chain(std::env::split_paths(&inherited).filter(|p| !p.as_os_str().is_empty()));
        let search_path = std::env::join_paths(dirs)
            .map_err(|e| HarnessError::InvalidSearchPath(e.to_string()))?;

        Ok(Self {
            search_path,
            config,
        })
    }

    pub fn search_path(&self) -> &OsStr {
        &self.search_path
    }

    pub fn config(&self) -> &ConfigPaths {
        &self.config
    }

    /// Locate an executable on this environment's search path
    pub fn which(&self, name: impl AsRef<OsStr>) -> Option<PathBuf> {
        optim_cmd::which(name, &self.search_path)
    }

    /// Start a command that runs with this environment's search path
    pub fn command(&self, program: impl Into<OsString>) -> CmdSpec {
        CmdSpec::new(program).env(env::PATH, &self.search_path)
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
