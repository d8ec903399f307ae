// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::env::names;
use crate::plan::{BuildType, DEFAULT_TARGET};

/// Build a CMake preset target and run its tests
#[derive(Parser)]
#[command(name = "presto")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target to build and filter tests by ("all" runs every test)
    #[arg(value_name = "TARGET", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Skip the build step and only run tests
    #[arg(long)]
    pub no_build: bool,

    /// Use the release configuration instead of debug
    #[arg(long)]
    pub release: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = names::PRESTO_CONFIG)]
    pub config: Option<PathBuf>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// The inputs that drive the build and test steps.
    pub fn options(&self) -> Options {
        Options {
            target: self.target.clone(),
            no_build: self.no_build,
            release: self.release,
        }
    }
}

/// Parsed inputs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    pub target: String,
    pub no_build: bool,
    pub release: bool,
}

impl Options {
    pub fn build_type(&self) -> BuildType {
        BuildType::from_release(self.release)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            no_build: false,
            release: false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
