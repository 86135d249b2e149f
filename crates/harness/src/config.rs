// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.

use crate::env;
use optim_cmd::{InvocationLog, Runner};

/// What to do when `compare` output holds no MEPP score
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMissPolicy {
    /// Treat the miss as "no difference" (score 0) and log a warning.
    /// Matches the long-standing behavior of the optimizer's test suite.
    #[default]
    Zero,
    /// Report the miss as an error
    Fail,
}

/// Settings shared by comparators built for one test run
#[derive(Clone, Debug, Default)]
pub struct HarnessConfig {
    pub parse_miss: ParseMissPolicy,
    /// Records every external command when set
    pub log: Option<InvocationLog>,
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults adjusted by `OPTIM_HARNESS_STRICT_PARSE`
    pub fn from_env() -> Self {
        let parse_miss = if env::strict_parse() {
            ParseMissPolicy::Fail
        } else {
            ParseMissPolicy::Zero
        };
        Self {
            parse_miss,
            log: None,
        }
    }

    pub fn with_parse_miss(mut self, policy: ParseMissPolicy) -> Self {
        self.parse_miss = policy;
        self
    }

    pub fn with_log(mut self, log: InvocationLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Command runner honoring the log setting
    pub fn runner(&self) -> Runner {
        match &self.log {
            Some(log) => Runner::new().with_log(log.clone()),
            None => Runner::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
