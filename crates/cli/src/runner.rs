// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plan execution.
//!
//! Runs the build and test invocations one after another, stopping at the
//! first failure. The invoked tools write straight to the terminal.

use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};
use crate::plan::{Invocation, Plan};

/// Termination status of an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub success: bool,
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl Status {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn exited(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }
}

impl From<ExitStatus> for Status {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Runs external commands.
pub trait Executor {
    /// Run the invocation to completion.
    fn execute(&mut self, invocation: &Invocation) -> Result<Status>;
}

/// Spawns real processes with inherited stdio and waits for them.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(&mut self, invocation: &Invocation) -> Result<Status> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        Ok(status.into())
    }
}

/// Run the plan: build (if planned), then test.
///
/// A failing build aborts before the test step.
pub fn run_plan(plan: &Plan, executor: &mut dyn Executor) -> Result<()> {
    if let Some(build) = &plan.build {
        run_step(build, executor)?;
        println!();
    }
    run_step(&plan.test, executor)
}

fn run_step(invocation: &Invocation, executor: &mut dyn Executor) -> Result<()> {
    tracing::debug!("running {invocation}");
    let status = executor.execute(invocation)?;
    tracing::debug!(code = ?status.code, success = status.success, "{} finished", invocation.program);

    if status.success {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            program: invocation.program.clone(),
            code: status.code,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
