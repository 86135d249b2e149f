// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image references with format sniffing.

use crate::error::HarnessError;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// How many leading bytes are inspected to detect the format
const SNIFF_LEN: u64 = 256;

/// Image container format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Gif,
    Png,
    Jpeg,
    Svg,
    Unknown,
}

impl ImageFormat {
    /// Detect the format from a file's leading bytes
    pub fn detect(header: &[u8]) -> Self {
        if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
            ImageFormat::Gif
        } else if header.starts_with(b"\x89PNG\r\n\x1a\n") {
            ImageFormat::Png
        } else if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
            ImageFormat::Jpeg
        } else if looks_like_svg(header) {
            ImageFormat::Svg
        } else {
            ImageFormat::Unknown
        }
    }

    /// Formats that may hold several frames and need flattening before a
    /// single-frame comparison
    pub fn is_animated_kind(self) -> bool {
        self == ImageFormat::Gif
    }

    pub fn extension(self) -> Option<&'static str> {
        match self {
            ImageFormat::Gif => Some("gif"),
            ImageFormat::Png => Some("png"),
            ImageFormat::Jpeg => Some("jpg"),
            ImageFormat::Svg => Some("svg"),
            ImageFormat::Unknown => None,
        }
    }
}

fn looks_like_svg(header: &[u8]) -> bool {
    let text = String::from_utf8_lossy(header);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    (text.starts_with("<?xml") || text.starts_with("<svg") || text.starts_with("<!DOCTYPE svg"))
        && text.contains("<svg")
}

/// A file on disk plus its detected format
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    path: PathBuf,
    format: ImageFormat,
}

impl ImageRef {
    /// Open `path` and sniff its format
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HarnessError> {
        let path = path.into();
        let mut header = Vec::new();
        File::open(&path)
            .and_then(|f| f.take(SNIFF_LEN).read_to_end(&mut header))
            .map_err(|e| HarnessError::io(&path, e))?;

        Ok(Self {
            format: ImageFormat::detect(&header),
            path,
        })
    }

    /// Reference a file with a known format without reading it
    pub fn with_format(path: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Extension for a derived temporary file: the original one if present,
    /// otherwise one matching the detected format
    pub(crate) fn temp_extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .or_else(|| self.format.extension().map(str::to_string))
            .unwrap_or_else(|| "gif".to_string())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
