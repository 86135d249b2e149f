// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_default_is_lenient_without_log() {
    let config = HarnessConfig::new();
    assert_eq!(config.parse_miss, ParseMissPolicy::Zero);
    assert!(config.log.is_none());
    assert!(config.runner().log().is_none());
}

#[test]
fn test_builder() {
    let log = InvocationLog::new();
    let config = HarnessConfig::new()
        .with_parse_miss(ParseMissPolicy::Fail)
        .with_log(log.clone());

    assert_eq!(config.parse_miss, ParseMissPolicy::Fail);
    let runner = config.runner();
    assert!(runner.log().is_some());
}
