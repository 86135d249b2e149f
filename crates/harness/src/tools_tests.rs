// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::paths::ConfigPaths;
use std::ffi::{OsStr, OsString};

fn empty_env() -> HarnessEnv {
    HarnessEnv::new(None, None, ConfigPaths::null()).unwrap()
}

#[test]
fn test_legacy_uses_tool_name() {
    let spec = ImageMagick::legacy().command(&empty_env(), "compare");
    assert_eq!(spec.program(), OsStr::new("compare"));
    assert!(spec.get_args().is_empty());
}

#[test]
fn test_prefix_puts_tool_first() {
    let spec = ImageMagick::with_prefix("magick")
        .command(&empty_env(), "convert")
        .arg("in.gif");
    assert_eq!(spec.program(), OsStr::new("magick"));
    assert_eq!(
        spec.get_args(),
        &[OsString::from("convert"), OsString::from("in.gif")]
    );
}

#[test]
fn test_detect_without_magick_falls_back() {
    let magick = ImageMagick::detect(&empty_env());
    assert_eq!(magick, ImageMagick::legacy());
    assert_eq!(magick.prefix(), None);
}

#[cfg(unix)]
#[test]
fn test_detect_finds_magick_in_pack() {
    use std::os::unix::fs::PermissionsExt;

    let pack = tempfile::tempdir().unwrap();
    let magick = pack.path().join("magick");
    std::fs::write(&magick, "#!/bin/sh\n").unwrap();
    std::fs::set_permissions(&magick, std::fs::Permissions::from_mode(0o755)).unwrap();

    let env = HarnessEnv::new(Some(pack.path().to_path_buf()), None, ConfigPaths::null()).unwrap();
    assert_eq!(ImageMagick::detect(&env).prefix(), Some(magick.as_path()));
}
