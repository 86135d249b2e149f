// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking command execution.

use crate::invocation::{CmdOutput, CmdSpec};
use crate::log::InvocationLog;
use std::io::{self, Read, Seek, SeekFrom};
use std::process::Stdio;
use std::time::Instant;
use thiserror::Error;

/// Runs external commands, optionally recording each one.
///
/// Every call blocks until the child exits. There is no timeout: a hung
/// tool hangs the caller.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    log: Option<InvocationLog>,
}

impl Runner {
    pub fn new() -> Self {
        Self { log: None }
    }

    /// Record every invocation into `log`
    pub fn with_log(mut self, log: InvocationLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn log(&self) -> Option<&InvocationLog> {
        self.log.as_ref()
    }

    /// Run a command with all output discarded. Returns whether it exited
    /// with status 0.
    pub fn run(&self, spec: &CmdSpec) -> Result<bool, CmdError> {
        tracing::debug!(command = %spec, "run");
        let started = Instant::now();
        let status = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CmdError::spawn(spec, source))?;

        self.record(spec, status.code(), None, started);
        Ok(status.success())
    }

    /// Run a command and capture stdout and stderr into one string, in the
    /// order the child wrote them.
    pub fn capture(&self, spec: &CmdSpec) -> Result<CmdOutput, CmdError> {
        tracing::debug!(command = %spec, "capture");
        let started = Instant::now();

        // Both streams share one file description, so writes interleave the
        // same way `2>&1` would.
        let mut sink = tempfile::tempfile().map_err(|source| CmdError::io(spec, source))?;
        let stdout = sink
            .try_clone()
            .map_err(|source| CmdError::io(spec, source))?;
        let stderr = sink
            .try_clone()
            .map_err(|source| CmdError::io(spec, source))?;

        let status = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()
            .map_err(|source| CmdError::spawn(spec, source))?;

        let mut bytes = Vec::new();
        sink.seek(SeekFrom::Start(0))
            .and_then(|_| sink.read_to_end(&mut bytes))
            .map_err(|source| CmdError::io(spec, source))?;

        let output = CmdOutput {
            code: status.code(),
            output: String::from_utf8_lossy(&bytes).into_owned(),
        };
        tracing::debug!(code = ?output.code, bytes = bytes.len(), "captured");

        self.record(spec, output.code, Some(output.output.clone()), started);
        Ok(output)
    }

    fn record(&self, spec: &CmdSpec, code: Option<i32>, output: Option<String>, started: Instant) {
        let Some(ref log) = self.log else {
            return;
        };
        let recorded = log.record(
            spec.program(),
            spec.get_args(),
            code,
            output,
            started.elapsed(),
        );
        if let Err(error) = recorded {
            tracing::warn!(command = %spec, %error, "invocation log write failed");
        }
    }
}

#[derive(Debug, Error)]
pub enum CmdError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while capturing `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl CmdError {
    fn spawn(spec: &CmdSpec, source: io::Error) -> Self {
        Self::Spawn {
            command: spec.to_string(),
            source,
        }
    }

    fn io(spec: &CmdSpec, source: io::Error) -> Self {
        Self::Io {
            command: spec.to_string(),
            source,
        }
    }

    /// Whether the program could not be found at all
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
