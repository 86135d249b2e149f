// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness error type.

use optim_cmd::CmdError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// A capability name outside the known set was requested. This is a
    /// defect in the caller, not a platform condition.
    #[error("Unknown check {0}")]
    UnknownCapability(String),

    #[error("cannot build search path: {0}")]
    InvalidSearchPath(String),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("flattening {} failed: `{command}` printed `{output}`", .image.display())]
    FlattenFailed {
        image: PathBuf,
        command: String,
        output: String,
    },

    /// `compare` exited with a status other than 0 (same) or 1 (different)
    #[error("compare {} with {} failed with `{output}`", .actual.display(), .expected.display())]
    CompareFailed {
        actual: PathBuf,
        expected: PathBuf,
        code: Option<i32>,
        output: String,
    },

    #[error("compare {} with {} printed no MEPP score: `{output}`", .actual.display(), .expected.display())]
    Unparseable {
        actual: PathBuf,
        expected: PathBuf,
        output: String,
    },

    #[error(transparent)]
    Cmd(#[from] CmdError),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
