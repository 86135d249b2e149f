// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image similarity via ImageMagick `compare -metric MEPP`.

use crate::config::{HarnessConfig, ParseMissPolicy};
use crate::environment::HarnessEnv;
use crate::error::HarnessError;
use crate::image::ImageRef;
use crate::paths::NULL_DEVICE;
use crate::tools::ImageMagick;
use optim_cmd::Runner;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tempfile::TempPath;

/// Integer, decimal or scientific number as printed by `compare`
const NUMBER: &str = r"\d+(?:\.\d+)?(?:[eE][-+]?\d+)?";

/// `(<score>, <other>)`; the score is the first number of the pair
static MEPP_PAIR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"\(({NUMBER}), {NUMBER}\)")).ok());

/// Extract the mean error per pixel from `compare` output
pub fn parse_mepp(output: &str) -> Option<f64> {
    let re = MEPP_PAIR.as_ref()?;
    re.captures(output)?.get(1)?.as_str().parse().ok()
}

/// Outcome of one `compare` run
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    /// Mean error per pixel; 0 for identical images
    pub score: f64,
    /// `compare` exited with 0 rather than 1
    pub identical: bool,
    pub output: String,
}

/// A comparison operand: the original file or a flattened temporary copy
/// that is deleted when dropped.
#[derive(Debug)]
pub enum Operand<'a> {
    Original(&'a Path),
    Flattened(TempPath),
}

impl Operand<'_> {
    pub fn path(&self) -> &Path {
        match *self {
            Operand::Original(path) => path,
            Operand::Flattened(ref temp) => temp,
        }
    }
}

/// Compares images with ImageMagick.
///
/// Every call blocks on the external tools; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct Comparator {
    env: HarnessEnv,
    magick: ImageMagick,
    runner: Runner,
    parse_miss: ParseMissPolicy,
}

impl Comparator {
    pub fn new(env: HarnessEnv, magick: ImageMagick) -> Self {
        Self {
            env,
            magick,
            runner: Runner::new(),
            parse_miss: ParseMissPolicy::default(),
        }
    }

    /// Resolve the ImageMagick binary name once from `env`
    pub fn detect(env: HarnessEnv) -> Self {
        let magick = ImageMagick::detect(&env);
        Self::new(env, magick)
    }

    pub fn with_config(mut self, config: &HarnessConfig) -> Self {
        self.runner = config.runner();
        self.parse_miss = config.parse_miss;
        self
    }

    pub fn with_parse_miss(mut self, policy: ParseMissPolicy) -> Self {
        self.parse_miss = policy;
        self
    }

    pub fn with_runner(mut self, runner: Runner) -> Self {
        self.runner = runner;
        self
    }

    pub fn env(&self) -> &HarnessEnv {
        &self.env
    }

    pub fn magick(&self) -> &ImageMagick {
        &self.magick
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    /// Mean error per pixel between `actual` and `expected`
    pub fn mepp(&self, actual: &ImageRef, expected: &ImageRef) -> Result<f64, HarnessError> {
        self.compare(actual, expected).map(|c| c.score)
    }

    /// Flatten both operands as needed and run `compare` on them.
    ///
    /// Exit status 0 (identical) and 1 (different) are results; any other
    /// status is an error carrying the tool output.
    pub fn compare(
        &self,
        actual: &ImageRef,
        expected: &ImageRef,
    ) -> Result<Comparison, HarnessError> {
        let a = self.flatten(actual)?;
        let b = self.flatten(expected)?;

        let spec = self
            .magick
            .command(&self.env, "compare")
            .args(["-metric", "MEPP", "-alpha", "Background"])
            .arg(a.path())
            .arg(b.path())
            .arg(NULL_DEVICE);
        let captured = self.runner.capture(&spec)?;

        let identical = match captured.code {
            Some(0) => true,
            Some(1) => false,
            code => {
                return Err(HarnessError::CompareFailed {
                    actual: actual.path().to_path_buf(),
                    expected: expected.path().to_path_buf(),
                    code,
                    output: captured.output,
                })
            }
        };

        let score = match parse_mepp(&captured.output) {
            Some(score) => score,
            None => match self.parse_miss {
                ParseMissPolicy::Zero => {
                    tracing::warn!(
                        actual = %actual,
                        expected = %expected,
                        output = %captured.output,
                        "no MEPP score in compare output, using 0"
                    );
                    0.0
                }
                ParseMissPolicy::Fail => {
                    return Err(HarnessError::Unparseable {
                        actual: actual.path().to_path_buf(),
                        expected: expected.path().to_path_buf(),
                        output: captured.output,
                    })
                }
            },
        };

        Ok(Comparison {
            score,
            identical,
            output: captured.output,
        })
    }

    /// Coalesce all frames of an animated image and stack them vertically
    /// into one temporary image. Other images are used as they are.
    pub fn flatten<'a>(&self, image: &'a ImageRef) -> Result<Operand<'a>, HarnessError> {
        if !image.format().is_animated_kind() {
            return Ok(Operand::Original(image.path()));
        }

        let flattened = tempfile::Builder::new()
            .prefix("flattened")
            .suffix(&format!(".{}", image.temp_extension()))
            .tempfile()
            .map_err(|e| HarnessError::io(std::env::temp_dir(), e))?
            .into_temp_path();

        let spec = self
            .magick
            .command(&self.env, "convert")
            .arg(image.path())
            .args(["-coalesce", "-append"])
            .arg(&*flattened);
        let captured = self.runner.capture(&spec)?;
        if !captured.success() {
            return Err(HarnessError::FlattenFailed {
                image: image.path().to_path_buf(),
                command: spec.to_string(),
                output: captured.output,
            });
        }

        Ok(Operand::Flattened(flattened))
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
