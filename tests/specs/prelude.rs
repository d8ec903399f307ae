//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running presto against throwaway projects whose
//! build and test programs are stand-ins configured through presto.toml.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Returns a Command configured to run the presto binary
pub fn presto_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("presto"));
    cmd.env_remove("PRESTO_CONFIG").env_remove("PRESTO_LOG");
    cmd
}

/// A temporary project root (git root marker included so discovery stops here).
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Project with no presto.toml.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project whose build and test steps run the given programs.
    pub fn with_programs(build: &str, test: &str) -> Self {
        let project = Self::empty();
        project.config(&format!(
            "version = 1\n\n[build]\nprogram = {build:?}\n\n[test]\nprogram = {test:?}\n"
        ));
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write presto.toml.
    pub fn config(&self, content: &str) -> &Self {
        self.file("presto.toml", content);
        self
    }

    /// Write a file relative to the project root.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write an executable shell script and return its absolute path.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = self.file(name, &format!("#!/bin/sh\n{body}\n"));
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path.to_str().unwrap().to_string()
    }

    /// presto command running in the project root.
    pub fn presto(&self, args: &[&str]) -> Command {
        let mut cmd = presto_cmd();
        cmd.args(args).current_dir(self.path());
        cmd
    }

    /// Run presto and capture its output.
    pub fn run(&self, args: &[&str]) -> RunAssert {
        let output = self.presto(args).output().expect("command should run");
        RunAssert { output }
    }
}

/// Captured presto output with fluent assertions.
pub struct RunAssert {
    pub output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Assert success
    pub fn passes(self) -> Self {
        assert!(
            self.output.status.success(),
            "expected presto to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            self.code(),
            self.stdout(),
            self.stderr()
        );
        self
    }

    /// Assert a specific exit code
    pub fn exits(self, code: i32) -> Self {
        assert_eq!(
            self.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            self.code(),
            self.stdout(),
            self.stderr()
        );
        self
    }

    /// Assert stdout contains a line equal to `line`
    pub fn stdout_has_line(self, line: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.lines().any(|l| l == line),
            "expected stdout line {:?}\nstdout: {}",
            line,
            stdout
        );
        self
    }

    /// Assert stdout has no line equal to `line`
    pub fn stdout_lacks_line(self, line: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.lines().any(|l| l == line),
            "unexpected stdout line {:?}\nstdout: {}",
            line,
            stdout
        );
        self
    }

    /// Assert stdout contains `s`
    pub fn stdout_has(self, s: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(s), "expected stdout to contain {:?}\nstdout: {}", s, stdout);
        self
    }

    /// Assert stderr contains `s`
    pub fn stderr_has(self, s: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(s), "expected stderr to contain {:?}\nstderr: {}", s, stderr);
        self
    }
}
