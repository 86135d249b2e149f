// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Platform capability probes used to skip inapplicable tests.
//!
//! Each probe runs at most once per process. The result is an optional
//! reason: `None` means the capability is available, `Some(reason)` explains
//! why tests depending on it should be skipped.

use crate::error::HarnessError;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A platform feature some tests depend on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Setting a file's mode to 0 is honored by the filesystem
    AnyFileModeAllowed,
    /// Files have non-zero inode numbers
    InodesSupport,
    /// Null signals can be delivered to the process group
    SignalsSupport,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::AnyFileModeAllowed,
        Capability::InodesSupport,
        Capability::SignalsSupport,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::AnyFileModeAllowed => "any_file_mode_allowed",
            Capability::InodesSupport => "inodes_support",
            Capability::SignalsSupport => "signals_support",
        }
    }

    /// Run the probe now, bypassing any cache
    pub fn probe(self) -> Option<String> {
        match self {
            Capability::AnyFileModeAllowed => probe_file_modes(),
            Capability::InodesSupport => probe_inodes(),
            Capability::SignalsSupport => probe_signals(),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| HarnessError::UnknownCapability(s.to_string()))
    }
}

/// Memoized probe results, one slot per capability
#[derive(Debug, Default)]
pub struct ProbeCache {
    file_modes: OnceLock<Option<String>>,
    inodes: OnceLock<Option<String>>,
    signals: OnceLock<Option<String>>,
}

impl ProbeCache {
    pub const fn new() -> Self {
        Self {
            file_modes: OnceLock::new(),
            inodes: OnceLock::new(),
            signals: OnceLock::new(),
        }
    }

    /// Probe result for `capability`, computing it on first use
    pub fn get(&self, capability: Capability) -> &Option<String> {
        self.get_or_probe(capability, Capability::probe)
    }

    /// Like [`ProbeCache::get`] with a custom probe for the first call.
    /// Later calls return the stored result and never run `probe`.
    pub fn get_or_probe<F>(&self, capability: Capability, probe: F) -> &Option<String>
    where
        F: FnOnce(Capability) -> Option<String>,
    {
        self.cell(capability).get_or_init(|| {
            let reason = probe(capability);
            tracing::debug!(%capability, reason = ?reason, "probed capability");
            reason
        })
    }

    /// Look up a capability by its textual name
    pub fn get_named(&self, name: &str) -> Result<&Option<String>, HarnessError> {
        Ok(self.get(name.parse()?))
    }

    pub fn is_cached(&self, capability: Capability) -> bool {
        self.cell(capability).get().is_some()
    }

    fn cell(&self, capability: Capability) -> &OnceLock<Option<String>> {
        match capability {
            Capability::AnyFileModeAllowed => &self.file_modes,
            Capability::InodesSupport => &self.inodes,
            Capability::SignalsSupport => &self.signals,
        }
    }
}

static GLOBAL: ProbeCache = ProbeCache::new();

/// The process-wide probe cache
pub fn global() -> &'static ProbeCache {
    &GLOBAL
}

/// Why tests needing `capability` should be skipped, if they should
pub fn skip_reason(capability: Capability) -> Option<&'static str> {
    GLOBAL.get(capability).as_deref()
}

/// [`skip_reason`] by textual name; unknown names are an error
pub fn skip_reason_named(name: &str) -> Result<Option<&'static str>, HarnessError> {
    Ok(GLOBAL.get_named(name)?.as_deref())
}

/// Return early from the enclosing test when `capability` is unavailable.
///
/// ```ignore
/// #[test]
/// fn keeps_inode() {
///     optim_harness::skip_unless!(Capability::InodesSupport);
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! skip_unless {
    ($capability:expr) => {
        if let Some(reason) = $crate::capability::skip_reason($capability) {
            eprintln!("skipped: {}", reason);
            return;
        }
    };
}

const FILE_MODES_UNSUPPORTED: &str = "full file modes are not supported";
const INODES_UNSUPPORTED: &str = "inodes are not supported";
const SIGNALS_UNSUPPORTED: &str = "signals are not supported";

fn probe_file_modes() -> Option<String> {
    probe_file_modes_in(&std::env::temp_dir())
}

/// Create a scratch file in `dir`, chmod it to 0 and check the result.
/// The scratch file is removed when the guard drops, on every path.
#[cfg(unix)]
pub(crate) fn probe_file_modes_in(dir: &std::path::Path) -> Option<String> {
    use std::os::unix::fs::PermissionsExt;

    let attempt = || -> std::io::Result<u32> {
        let scratch = tempfile::Builder::new().prefix("posix").tempfile_in(dir)?;
        std::fs::set_permissions(scratch.path(), std::fs::Permissions::from_mode(0))?;
        Ok(std::fs::metadata(scratch.path())?.permissions().mode())
    };

    match attempt() {
        Ok(mode) => file_mode_reason(mode),
        Err(e) => {
            tracing::debug!(error = %e, "file mode probe failed");
            Some(FILE_MODES_UNSUPPORTED.to_string())
        }
    }
}

#[cfg(not(unix))]
pub(crate) fn probe_file_modes_in(_dir: &std::path::Path) -> Option<String> {
    Some(FILE_MODES_UNSUPPORTED.to_string())
}

/// Permission bits left after a chmod to 0
pub(crate) fn file_mode_reason(mode: u32) -> Option<String> {
    (mode & 0o777 != 0).then(|| FILE_MODES_UNSUPPORTED.to_string())
}

fn probe_inodes() -> Option<String> {
    match std::env::current_exe().and_then(|exe| exe.metadata()) {
        Ok(metadata) => inode_reason(inode(&metadata)),
        Err(e) => {
            tracing::debug!(error = %e, "inode probe failed");
            Some(INODES_UNSUPPORTED.to_string())
        }
    }
}

#[cfg(unix)]
fn inode(metadata: &std::fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.ino()
}

#[cfg(not(unix))]
fn inode(_metadata: &std::fs::Metadata) -> u64 {
    0
}

/// Virtual and some overlay filesystems report inode 0
pub(crate) fn inode_reason(ino: u64) -> Option<String> {
    (ino == 0).then(|| INODES_UNSUPPORTED.to_string())
}

/// Send the null signal to our own process group.
#[cfg(unix)]
fn probe_signals() -> Option<String> {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    match kill(Pid::from_raw(0), None) {
        Ok(()) => None,
        Err(e) => {
            tracing::debug!(error = %e, "signal probe failed");
            Some(SIGNALS_UNSUPPORTED.to_string())
        }
    }
}

#[cfg(not(unix))]
fn probe_signals() -> Option<String> {
    Some(SIGNALS_UNSUPPORTED.to_string())
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
