// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface for running harness checks outside a test suite.

use crate::capability::{self, Capability};
use crate::compare::Comparator;
use crate::config::{HarnessConfig, ParseMissPolicy};
use crate::environment::HarnessEnv;
use crate::image::ImageRef;
use crate::matchers::{self, SimilarTo};
use crate::paths::ConfigPaths;
use crate::tools::ImageMagick;
use anyhow::Context;
use clap::{Parser, Subcommand};
use optim_cmd::InvocationLog;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Image-optim test harness
#[derive(Parser, Debug)]
#[command(name = "optim-harness", version, about = "Image-optim test harness utilities")]
pub struct Cli {
    /// Log external commands and probe results to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fail when compare prints no MEPP score instead of using 0
    #[arg(long, global = true)]
    pub strict_parse: bool,

    /// Append every external command to this file (JSONL)
    #[arg(long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report platform capabilities (all of them when no name is given);
    /// exits with 1 when any is unsupported
    Probe {
        /// any_file_mode_allowed, inodes_support or signals_support
        names: Vec<String>,
    },

    /// Print the mean error per pixel between two images
    Mepp { actual: PathBuf, expected: PathBuf },

    /// Check that ACTUAL is within --max mean error per pixel of EXPECTED
    Similar {
        actual: PathBuf,
        expected: PathBuf,
        /// Largest accepted mean error per pixel
        #[arg(long, default_value = "0")]
        max: f64,
    },

    /// Check that ACTUAL is smaller in bytes than EXPECTED
    Smaller { actual: PathBuf, expected: PathBuf },

    /// Show the search path and config locations tools run with
    Env,
}

/// Whether the requested check held
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    fn from_bool(ok: bool) -> Self {
        if ok {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Pass => ExitCode::SUCCESS,
            Outcome::Fail => ExitCode::from(1),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProbeReport {
    capability: &'static str,
    supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct MeppReport<'a> {
    actual: &'a Path,
    expected: &'a Path,
    score: f64,
    identical: bool,
}

#[derive(Debug, Serialize)]
struct SimilarReport<'a> {
    actual: &'a Path,
    expected: &'a Path,
    diff: f64,
    max_difference: f64,
    matches: bool,
}

#[derive(Debug, Serialize)]
struct SmallerReport<'a> {
    actual: &'a Path,
    expected: &'a Path,
    actual_size: u64,
    expected_size: u64,
    smaller: bool,
}

#[derive(Debug, Serialize)]
struct EnvReport<'a> {
    search_path: Vec<PathBuf>,
    global_config: &'a Path,
    local_config: &'a Path,
    /// Global config the optimizer would read without the stub
    user_global_config: &'a Path,
    magick: Option<&'a Path>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<HarnessConfig> {
        let mut config = HarnessConfig::from_env();
        if self.strict_parse {
            config = config.with_parse_miss(ParseMissPolicy::Fail);
        }
        if let Some(ref path) = self.log {
            let log = InvocationLog::with_file(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            config = config.with_log(log);
        }
        Ok(config)
    }

    fn comparator(&self) -> anyhow::Result<Comparator> {
        let env = HarnessEnv::for_tests()?;
        Ok(Comparator::detect(env).with_config(&self.config()?))
    }
}

/// Execute the parsed command, writing results to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<Outcome> {
    match &cli.command {
        Command::Probe { names } => probe(cli, names, out),
        Command::Mepp { actual, expected } => {
            let comparator = cli.comparator()?;
            let comparison = comparator.compare(&ImageRef::open(actual)?, &ImageRef::open(expected)?)?;
            if cli.json {
                write_json(
                    out,
                    &MeppReport {
                        actual,
                        expected,
                        score: comparison.score,
                        identical: comparison.identical,
                    },
                )?;
            } else {
                writeln!(out, "{}", comparison.score)?;
            }
            Ok(Outcome::Pass)
        }
        Command::Similar {
            actual,
            expected,
            max,
        } => {
            let comparator = cli.comparator()?;
            let similarity = SimilarTo::new(ImageRef::open(expected)?, *max)
                .evaluate(&comparator, &ImageRef::open(actual)?)?;
            if cli.json {
                write_json(
                    out,
                    &SimilarReport {
                        actual,
                        expected,
                        diff: similarity.diff,
                        max_difference: similarity.max_difference,
                        matches: similarity.matches(),
                    },
                )?;
            } else {
                writeln!(out, "{}", similarity)?;
            }
            Ok(Outcome::from_bool(similarity.matches()))
        }
        Command::Smaller { actual, expected } => {
            let smaller = matchers::smaller_than(actual, expected)?;
            let actual_size = matchers::file_size(actual)?;
            let expected_size = matchers::file_size(expected)?;
            if cli.json {
                write_json(
                    out,
                    &SmallerReport {
                        actual,
                        expected,
                        actual_size,
                        expected_size,
                        smaller,
                    },
                )?;
            } else {
                let verdict = if smaller { "is" } else { "is not" };
                writeln!(
                    out,
                    "{} ({} bytes) {} smaller than {} ({} bytes)",
                    actual.display(),
                    actual_size,
                    verdict,
                    expected.display(),
                    expected_size
                )?;
            }
            Ok(Outcome::from_bool(smaller))
        }
        Command::Env => {
            let env = HarnessEnv::for_tests()?;
            let magick = ImageMagick::detect(&env);
            let user = ConfigPaths::from_env();
            if cli.json {
                write_json(
                    out,
                    &EnvReport {
                        search_path: std::env::split_paths(env.search_path()).collect(),
                        global_config: env.config().global(),
                        local_config: env.config().local(),
                        user_global_config: user.global(),
                        magick: magick.prefix(),
                    },
                )?;
            } else {
                for dir in std::env::split_paths(env.search_path()) {
                    writeln!(out, "path: {}", dir.display())?;
                }
                writeln!(
                    out,
                    "global config: {} (stubbed from {})",
                    env.config().global().display(),
                    user.global().display()
                )?;
                writeln!(out, "local config: {}", env.config().local().display())?;
                match magick.prefix() {
                    Some(prefix) => writeln!(out, "imagemagick: {}", prefix.display())?,
                    None => writeln!(out, "imagemagick: convert/compare")?,
                }
            }
            Ok(Outcome::Pass)
        }
    }
}

fn probe<W: Write>(cli: &Cli, names: &[String], out: &mut W) -> anyhow::Result<Outcome> {
    // Reject unknown names before any probe runs.
    let capabilities = if names.is_empty() {
        Capability::ALL.to_vec()
    } else {
        names
            .iter()
            .map(|n| n.parse::<Capability>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let reports: Vec<ProbeReport> = capabilities
        .into_iter()
        .map(|c| {
            let reason = capability::skip_reason(c).map(str::to_string);
            ProbeReport {
                capability: c.name(),
                supported: reason.is_none(),
                reason,
            }
        })
        .collect();

    if cli.json {
        write_json(out, &reports)?;
    } else {
        for report in &reports {
            match report.reason {
                None => writeln!(out, "{}: supported", report.capability)?,
                Some(ref reason) => writeln!(out, "{}: {}", report.capability, reason)?,
            }
        }
    }
    Ok(Outcome::from_bool(reports.iter().all(|r| r.supported)))
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
