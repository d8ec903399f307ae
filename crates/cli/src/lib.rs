// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build a CMake preset target and run the matching CTest tests.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod plan;
pub mod runner;

pub use cli::{Cli, Options};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use plan::{BuildType, Invocation, Plan};
pub use runner::{Executor, Status, SystemExecutor, run_plan};
