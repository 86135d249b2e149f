// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

#[rstest]
#[case(b"GIF89a\x01\x00".as_slice(), ImageFormat::Gif)]
#[case(b"GIF87a".as_slice(), ImageFormat::Gif)]
#[case(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".as_slice(), ImageFormat::Png)]
#[case(b"\xff\xd8\xff\xe0\0\x10JFIF".as_slice(), ImageFormat::Jpeg)]
#[case(b"<?xml version=\"1.0\"?>\n<svg xmlns=\"x\"/>".as_slice(), ImageFormat::Svg)]
#[case(b"  <svg width=\"1\"/>".as_slice(), ImageFormat::Svg)]
#[case(b"<?xml version=\"1.0\"?><html/>".as_slice(), ImageFormat::Unknown)]
#[case(b"GIF8".as_slice(), ImageFormat::Unknown)]
#[case(b"".as_slice(), ImageFormat::Unknown)]
fn test_detect(#[case] header: &[u8], #[case] expected: ImageFormat) {
    assert_eq!(ImageFormat::detect(header), expected);
}

#[test]
fn test_only_gif_is_animated_kind() {
    assert!(ImageFormat::Gif.is_animated_kind());
    assert!(!ImageFormat::Png.is_animated_kind());
    assert!(!ImageFormat::Jpeg.is_animated_kind());
    assert!(!ImageFormat::Svg.is_animated_kind());
    assert!(!ImageFormat::Unknown.is_animated_kind());
}

#[test]
fn test_open_sniffs_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames");
    std::fs::write(&path, b"GIF89a0123456789").unwrap();

    let image = ImageRef::open(&path).unwrap();
    assert_eq!(image.format(), ImageFormat::Gif);
    assert_eq!(image.to_string(), path.display().to_string());
}

#[test]
fn test_open_missing_file() {
    let err = ImageRef::open("/nonexistent/optim-harness/x.png").unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/optim-harness/x.png"));
}

#[rstest]
#[case("a/b.gif", ImageFormat::Gif, "gif")]
#[case("a/b.GIF", ImageFormat::Gif, "GIF")]
#[case("a/b", ImageFormat::Png, "png")]
#[case("a/b", ImageFormat::Unknown, "gif")]
fn test_temp_extension(#[case] path: &str, #[case] format: ImageFormat, #[case] expected: &str) {
    assert_eq!(ImageRef::with_format(path, format).temp_extension(), expected);
}
