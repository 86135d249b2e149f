// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Tests gated on platform capabilities via `skip_unless!`.

use optim_harness::capability::{self, Capability};
use optim_harness::skip_unless;

#[test]
fn test_reasons_are_stable_across_calls() {
    for capability in Capability::ALL {
        let first = capability::global().get(capability);
        let second = capability::global().get(capability);
        assert!(std::ptr::eq(first, second));
        if let Some(reason) = first {
            assert!(!reason.is_empty());
        }
    }
}

#[cfg(unix)]
#[test]
fn test_hard_links_share_inode() {
    use std::os::unix::fs::MetadataExt;
    skip_unless!(Capability::InodesSupport);

    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("original.png");
    let link = dir.path().join("link.png");
    std::fs::write(&original, b"image").unwrap();
    std::fs::hard_link(&original, &link).unwrap();

    let a = std::fs::metadata(&original).unwrap();
    let b = std::fs::metadata(&link).unwrap();
    assert_eq!(a.ino(), b.ino());
    assert_ne!(a.ino(), 0);
}

#[cfg(unix)]
#[test]
fn test_zero_mode_is_preserved() {
    use std::os::unix::fs::PermissionsExt;
    skip_unless!(Capability::AnyFileModeAllowed);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locked.png");
    std::fs::write(&path, b"image").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0)).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0);
}

#[cfg(unix)]
#[test]
fn test_null_signal_to_self() {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;
    skip_unless!(Capability::SignalsSupport);

    assert!(kill(Pid::this(), None).is_ok());
}
