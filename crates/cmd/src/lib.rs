// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External command execution for image-optim tests.
//!
//! Commands are described as a program plus discrete arguments and are never
//! passed through a shell. Output of both streams can be captured into a
//! single interleaved string, and every invocation can be recorded in an
//! [`InvocationLog`] for later inspection.

mod duration_serde;
mod invocation;
mod log;
mod runner;
mod which;

pub use invocation::{CmdOutput, CmdSpec, Invocation};
pub use log::InvocationLog;
pub use runner::{CmdError, Runner};
pub use which::which;
