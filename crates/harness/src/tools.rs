// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ImageMagick binary-name resolution.

use crate::environment::HarnessEnv;
use optim_cmd::CmdSpec;
use std::path::{Path, PathBuf};

/// How ImageMagick tools are invoked on this host.
///
/// ImageMagick 7 ships a single `magick` binary taking the tool name as its
/// first argument; older installs provide `convert` and `compare` directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMagick {
    prefix: Option<PathBuf>,
}

impl ImageMagick {
    /// Use `magick` if it is on the search path, bare tool names otherwise
    pub fn detect(env: &HarnessEnv) -> Self {
        let prefix = env.which("magick");
        tracing::debug!(prefix = ?prefix, "resolved imagemagick");
        Self { prefix }
    }

    /// Bare `convert` / `compare`
    pub fn legacy() -> Self {
        Self { prefix: None }
    }

    /// Run every tool through `program <tool> ...`
    pub fn with_prefix(program: impl Into<PathBuf>) -> Self {
        Self {
            prefix: Some(program.into()),
        }
    }

    pub fn prefix(&self) -> Option<&Path> {
        self.prefix.as_deref()
    }

    /// Command for `tool` (e.g. `"compare"`) in `env`
    pub fn command(&self, env: &HarnessEnv, tool: &str) -> CmdSpec {
        match &self.prefix {
            Some(program) => env.command(program).arg(tool),
            None => env.command(tool),
        }
    }
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
