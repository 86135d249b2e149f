// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

fn sh(script: &str) -> CmdSpec {
    CmdSpec::new("sh").args(["-c", script])
}

#[test]
fn test_missing_program_is_spawn_error() {
    let runner = Runner::new();
    let err = runner
        .capture(&CmdSpec::new("definitely-not-a-real-tool-7f3a"))
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("definitely-not-a-real-tool-7f3a"));
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn test_run_reports_success() {
        let runner = Runner::new();
        assert!(runner.run(&sh("exit 0")).unwrap());
        assert!(!runner.run(&sh("echo noisy; exit 1")).unwrap());
    }

    #[test]
    fn test_capture_merges_streams_in_order() {
        let runner = Runner::new();
        let out = runner
            .capture(&sh("echo first; echo second >&2; echo third"))
            .unwrap();

        assert_eq!(out.code, Some(0));
        assert_eq!(out.output, "first\nsecond\nthird\n");
    }

    #[test]
    fn test_capture_keeps_exit_code() {
        let runner = Runner::new();
        let out = runner.capture(&sh("echo broken >&2; exit 2")).unwrap();

        assert_eq!(out.code, Some(2));
        assert_eq!(out.output, "broken\n");
    }

    #[test]
    fn test_capture_signal_has_no_code() {
        let runner = Runner::new();
        let out = runner.capture(&sh("kill -9 $$")).unwrap();
        assert_eq!(out.code, None);
    }

    #[test]
    fn test_arguments_are_not_shell_interpreted() {
        let runner = Runner::new();
        let out = runner
            .capture(&CmdSpec::new("echo").args(["$HOME", "a b", "`id`"]))
            .unwrap();
        assert_eq!(out.output, "$HOME a b `id`\n");
    }

    #[test]
    fn test_env_is_passed_to_child() {
        let runner = Runner::new();
        let out = runner
            .capture(&sh("printf %s \"$OPTIM_CMD_MARKER\"").env("OPTIM_CMD_MARKER", "set"))
            .unwrap();
        assert_eq!(out.output, "set");
    }

    #[test]
    fn test_log_records_run_and_capture() {
        let log = InvocationLog::new();
        let runner = Runner::new().with_log(log.clone());

        runner.run(&sh("exit 3")).unwrap();
        runner.capture(&sh("echo hi")).unwrap();

        let invocations = log.invocations();
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].program, "sh");
        assert_eq!(invocations[0].code, Some(3));
        assert_eq!(invocations[0].output, None);
        assert_eq!(invocations[1].output.as_deref(), Some("hi\n"));
        assert!(runner.log().is_some());
    }
}
