// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build and test invocation planning.
//!
//! Turns the parsed inputs and config into the external commands to run,
//! without running anything.

use std::borrow::Cow;
use std::fmt;

use crate::cli::Options;
use crate::config::Config;

/// Target name meaning "build everything, run every test".
pub const DEFAULT_TARGET: &str = "all";

/// Test filter that matches every test name.
pub const MATCH_ALL: &str = ".*";

/// Build configuration selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub fn from_release(release: bool) -> Self {
        if release {
            BuildType::Release
        } else {
            BuildType::Debug
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preset name for a build type, e.g. `conan-debug`.
pub fn preset_name(prefix: &str, build_type: BuildType) -> String {
    format!("{prefix}-{build_type}")
}

/// Test name filter for a target.
///
/// The `all` target matches every test; anything else is passed through verbatim.
pub fn test_filter(target: &str) -> &str {
    if target == DEFAULT_TARGET {
        MATCH_ALL
    } else {
        target
    }
}

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Renders as a shell command line; arguments that would not survive word
/// splitting are single-quoted.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(word: &str) -> Cow<'_, str> {
    if !word.is_empty() && !word.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        return Cow::Borrowed(word);
    }
    Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
}

/// The commands for one run: an optional build followed by a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub build: Option<Invocation>,
    pub test: Invocation,
}

impl Plan {
    pub fn new(options: &Options, config: &Config) -> Self {
        let preset = preset_name(&config.preset_prefix, options.build_type());

        let build = (!options.no_build).then(|| {
            Invocation::new(&config.build.program)
                .args(["--build", "--preset", preset.as_str()])
                .args(["--target", options.target.as_str()])
                .args(config.build.args.iter().cloned())
        });

        let test = Invocation::new(&config.test.program)
            .args(["--preset", preset.as_str()])
            .args(config.test.args.iter().cloned())
            .arg("-R")
            .arg(test_filter(&options.target));

        Self { build, test }
    }

    /// Invocations in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &Invocation> {
        self.build.iter().chain(std::iter::once(&self.test))
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
