// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use std::thread;

fn record(log: &InvocationLog, tool: &str, code: Option<i32>) -> io::Result<()> {
    log.record(
        &OsString::from("magick"),
        &[OsString::from(tool), OsString::from("a.png")],
        code,
        Some(format!("{} output", tool)),
        Duration::from_millis(5),
    )
}

#[test]
fn test_record_and_retrieve() {
    let log = InvocationLog::new();
    assert!(log.is_empty());

    record(&log, "compare", Some(0)).unwrap();

    assert_eq!(log.len(), 1);
    let invocations = log.invocations();
    assert_eq!(invocations[0].seq, 0);
    assert_eq!(invocations[0].program, "magick");
    assert_eq!(invocations[0].args, vec!["compare", "a.png"]);
    assert_eq!(invocations[0].output.as_deref(), Some("compare output"));
}

#[rstest]
#[case("compare", 2)]
#[case("convert", 1)]
#[case("magick", 3)]
#[case("a.png", 3)]
#[case("identify", 0)]
fn test_find_by_arg(#[case] word: &str, #[case] expected: usize) {
    let log = InvocationLog::new();
    record(&log, "convert", Some(0)).unwrap();
    record(&log, "compare", Some(1)).unwrap();
    record(&log, "compare", None).unwrap();

    assert_eq!(log.find_by_arg(word).len(), expected);
}

#[test]
fn test_clones_share_records() {
    let log = InvocationLog::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let log = log.clone();
            thread::spawn(move || record(&log, "compare", Some(0)).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(log.len(), 4);
    let mut seqs: Vec<u64> = log.invocations().iter().map(|i| i.seq).collect();
    seqs.sort_unstable();
    assert_eq!(seqs, vec![0, 1, 2, 3]);
}

#[test]
fn test_with_file_writes_jsonl_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invocations.jsonl");
    let log = InvocationLog::with_file(&path).unwrap();

    record(&log, "convert", Some(0)).unwrap();
    record(&log, "compare", Some(2)).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Invocation> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].args[0], "convert");
    assert_eq!(lines[1].seq, 1);
    assert_eq!(lines[1].code, Some(2));
}

#[cfg(target_os = "linux")]
#[test]
fn test_jsonl_write_failure_is_reported() {
    // Every write to /dev/full fails with ENOSPC.
    if !Path::new("/dev/full").exists() {
        return;
    }
    let log = InvocationLog::with_file(Path::new("/dev/full")).unwrap();

    let err = record(&log, "compare", Some(0)).unwrap_err();

    assert_eq!(err.raw_os_error(), Some(28));
    assert_eq!(log.len(), 1);
}
