// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test harness for the image-optim wrapper.
//!
//! Provides what the optimizer's test suite needs around the actual
//! optimization code:
//!
//! - [`HarnessEnv`]: search path with the bundled tool pack first and config
//!   lookups stubbed to the null device
//! - [`capability`]: memoized platform probes for skipping tests
//! - [`Comparator`]: ImageMagick `compare -metric MEPP` with animated GIFs
//!   flattened first
//! - [`matchers`]: `smaller_than` and `similar_to` predicates
//!
//! ```no_run
//! use optim_harness::{Comparator, HarnessEnv, ImageRef};
//!
//! # fn main() -> Result<(), optim_harness::HarnessError> {
//! let comparator = Comparator::detect(HarnessEnv::for_tests()?);
//! let actual = ImageRef::open("out/optimized.gif")?;
//! let expected = ImageRef::open("fixtures/original.gif")?;
//! let check = optim_harness::matchers::similar_to(&comparator, &actual, &expected, 0.001)?;
//! assert!(check.matches(), "{}", check.failure_message());
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod cli;
pub mod compare;
pub mod config;
pub mod env;
pub mod environment;
pub mod error;
pub mod image;
pub mod logging;
pub mod matchers;
pub mod paths;
pub mod tools;

pub use capability::{Capability, ProbeCache};
pub use compare::{parse_mepp, Comparator, Comparison};
pub use config::{HarnessConfig, ParseMissPolicy};
pub use environment::HarnessEnv;
pub use error::HarnessError;
pub use image::{ImageFormat, ImageRef};
pub use paths::{ConfigPaths, NULL_DEVICE};
pub use tools::ImageMagick;
