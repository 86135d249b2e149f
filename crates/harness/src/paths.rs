// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Null device and image_optim config file locations.

use crate::env;
use std::path::{Path, PathBuf};

/// Path that discards writes and reads as empty
#[cfg(not(windows))]
pub const NULL_DEVICE: &str = "/dev/null";
#[cfg(windows)]
pub const NULL_DEVICE: &str = "NUL";

/// File name of the user-wide config under the config home
pub const GLOBAL_CONFIG_NAME: &str = "image_optim.yml";
/// File name of the per-directory config
pub const LOCAL_CONFIG_NAME: &str = ".image_optim.yml";

/// Where image_optim looks for its global and local configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigPaths {
    global: PathBuf,
    local: PathBuf,
}

impl ConfigPaths {
    /// Locations the optimizer would read for the current user
    pub fn from_env() -> Self {
        Self::from_parts(env::xdg_config_home(), env::home())
    }

    /// `$XDG_CONFIG_HOME/image_optim.yml`, falling back to
    /// `$HOME/.config/image_optim.yml`
    pub fn from_parts(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        let config_home = xdg_config_home.unwrap_or_else(|| {
            home.map(|h| h.join(".config"))
                .unwrap_or_else(|| PathBuf::from("~/.config"))
        });
        Self {
            global: config_home.join(GLOBAL_CONFIG_NAME),
            local: PathBuf::from(LOCAL_CONFIG_NAME),
        }
    }

    /// Both lookups point at the null device, so no user config is read
    pub fn null() -> Self {
        Self {
            global: PathBuf::from(NULL_DEVICE),
            local: PathBuf::from(NULL_DEVICE),
        }
    }

    pub fn is_null(&self) -> bool {
        self.global == Path::new(NULL_DEVICE) && self.local == Path::new(NULL_DEVICE)
    }

    pub fn global(&self) -> &Path {
        &self.global
    }

    pub fn local(&self) -> &Path {
        &self.local
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
