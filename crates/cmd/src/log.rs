// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared record of external commands, optionally mirrored to a JSONL file.

use crate::invocation::Invocation;
use parking_lot::Mutex;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

#[derive(Default)]
struct Shared {
    invocations: Mutex<Vec<Invocation>>,
    jsonl: Option<Mutex<BufWriter<File>>>,
}

/// Record of the commands a [`Runner`](crate::Runner) ran.
///
/// Clones share the same record, so a log handed to a runner can be
/// inspected afterwards through the original handle.
#[derive(Clone, Default)]
pub struct InvocationLog {
    shared: Arc<Shared>,
}

impl InvocationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append every invocation to `path`, one JSON object per line.
    /// The file is truncated first.
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let jsonl = BufWriter::new(File::create(path)?);
        Ok(Self {
            shared: Arc::new(Shared {
                invocations: Mutex::default(),
                jsonl: Some(Mutex::new(jsonl)),
            }),
        })
    }

    /// Record a finished command.
    ///
    /// The invocation is always kept in memory; an error means the JSONL
    /// mirror could not be written and is now incomplete.
    pub fn record(
        &self,
        program: &OsStr,
        args: &[OsString],
        code: Option<i32>,
        output: Option<String>,
        duration: Duration,
    ) -> io::Result<()> {
        let mut invocations = self.shared.invocations.lock();
        let invocation = Invocation {
            seq: invocations.len() as u64,
            timestamp: SystemTime::now(),
            duration,
            program: program.to_string_lossy().into_owned(),
            args: args.iter().map(|a| a.to_string_lossy().into_owned()).collect(),
            code,
            output,
        };
        // Written under the record lock so file order matches `seq`.
        let written = self.append(&invocation);
        invocations.push(invocation);
        written
    }

    fn append(&self, invocation: &Invocation) -> io::Result<()> {
        let Some(ref jsonl) = self.shared.jsonl else {
            return Ok(());
        };
        let mut w = jsonl.lock();
        serde_json::to_writer(&mut *w, invocation)?;
        w.write_all(b"\n")?;
        w.flush()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.shared.invocations.lock().clone()
    }

    /// Invocations whose program or any argument equals `word`, e.g. the
    /// tool name after a `magick` prefix
    pub fn find_by_arg(&self, word: &str) -> Vec<Invocation> {
        self.shared
            .invocations
            .lock()
            .iter()
            .filter(|i| i.program == word || i.args.iter().any(|a| a == word))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shared.invocations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for InvocationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvocationLog")
            .field("len", &self.len())
            .field("jsonl", &self.shared.jsonl.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
