// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

#[rstest]
#[case("1", true)]
#[case("true", true)]
#[case(" YES ", true)]
#[case("on", true)]
#[case("0", false)]
#[case("false", false)]
#[case("", false)]
#[case("maybe", false)]
fn test_parse_flag(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(parse_flag(value), expected);
}

#[test]
fn test_generated_names_match_variables() {
    assert_eq!(IMAGE_OPTIM_PACK_PATH, "IMAGE_OPTIM_PACK_PATH");
    assert_eq!(OPTIM_HARNESS_LOG, "OPTIM_HARNESS_LOG");
    assert_eq!(PATH, "PATH");
}

#[test]
fn test_unset_flag_is_false() {
    assert!(!var_flag("OPTIM_HARNESS_TEST_FLAG_NEVER_SET_9c1d"));
}
