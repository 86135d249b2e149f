// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Predicates for asserting on optimizer output.

use crate::compare::Comparator;
use crate::error::HarnessError;
use crate::image::ImageRef;
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether `actual` is strictly smaller in bytes than `expected`.
///
/// Only file sizes are read; no external tool runs.
pub fn smaller_than(actual: &Path, expected: &Path) -> Result<bool, HarnessError> {
    Ok(file_size(actual)? < file_size(expected)?)
}

/// Size of `path` in bytes
pub fn file_size(path: &Path) -> Result<u64, HarnessError> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| HarnessError::io(path, e))
}

/// Expectation that an image is within `max_difference` mean error per
/// pixel of `expected`
#[derive(Clone, Debug)]
pub struct SimilarTo {
    expected: ImageRef,
    max_difference: f64,
}

impl SimilarTo {
    pub fn new(expected: ImageRef, max_difference: f64) -> Self {
        Self {
            expected,
            max_difference,
        }
    }

    /// Run the comparison for `actual`. Errors come from the comparator; a
    /// too-large difference is reported through [`Similarity::matches`].
    pub fn evaluate(
        &self,
        comparator: &Comparator,
        actual: &ImageRef,
    ) -> Result<Similarity, HarnessError> {
        let diff = comparator.mepp(actual, &self.expected)?;
        Ok(Similarity {
            actual: actual.path().to_path_buf(),
            expected: self.expected.path().to_path_buf(),
            max_difference: self.max_difference,
            diff,
        })
    }
}

/// Shorthand for `SimilarTo::new(expected, max).evaluate(comparator, actual)`
pub fn similar_to(
    comparator: &Comparator,
    actual: &ImageRef,
    expected: &ImageRef,
    max_difference: f64,
) -> Result<Similarity, HarnessError> {
    SimilarTo::new(expected.clone(), max_difference).evaluate(comparator, actual)
}

/// Result of a [`SimilarTo`] check
#[derive(Clone, Debug, PartialEq)]
pub struct Similarity {
    pub actual: PathBuf,
    pub expected: PathBuf,
    pub max_difference: f64,
    /// Measured mean error per pixel
    pub diff: f64,
}

impl Similarity {
    pub fn matches(&self) -> bool {
        self.diff <= self.max_difference
    }

    pub fn failure_message(&self) -> String {
        format!(
            "expected {} to have at most {} difference from {}, got mean error per pixel of {}",
            self.actual.display(),
            self.max_difference,
            self.expected.display(),
            self.diff
        )
    }

    /// `Ok(diff)` when similar enough, the failure message otherwise
    pub fn into_result(self) -> Result<f64, String> {
        if self.matches() {
            Ok(self.diff)
        } else {
            Err(self.failure_message())
        }
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches() {
            write!(
                f,
                "{} is within {} of {} ({})",
                self.actual.display(),
                self.max_difference,
                self.expected.display(),
                self.diff
            )
        } else {
            f.write_str(&self.failure_message())
        }
    }
}

#[cfg(test)]
#[path = "matchers_tests.rs"]
mod tests;
