// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles presto.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "presto.toml";

/// Only supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

const KNOWN_KEYS: &[&str] = &["version", "preset_prefix", "build", "test"];
const KNOWN_STEP_KEYS: &[&str] = &["program", "args"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Preset name prefix; presets are named `<prefix>-debug` / `<prefix>-release`.
    #[serde(default = "Config::default_preset_prefix")]
    pub preset_prefix: String,

    /// Build step settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Test step settings.
    #[serde(default)]
    pub test: TestConfig,
}

impl Config {
    fn default_preset_prefix() -> String {
        "conan".to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            preset_prefix: Self::default_preset_prefix(),
            build: BuildConfig::default(),
            test: TestConfig::default(),
        }
    }
}

/// Build step: `<program> --build --preset <preset> --target <target> <args...>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: "cmake".to_string(),
            args: Vec::new(),
        }
    }
}

/// Test step: `<program> --preset <preset> <args...> -R <filter>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            program: "ctest".to_string(),
            args: vec!["--output-on-failure".to_string()],
        }
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    toml::from_str(content).map_err(|e| config_error(e.to_string(), path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    let table: toml::Table =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;
    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    Ok(config)
}

fn check_version(content: &str, path: &Path) -> Result<()> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string(), path))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade presto to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }
    Ok(())
}

/// Collect unrecognized keys, nested ones as `section.key`.
pub(crate) fn unknown_keys(table: &toml::Table) -> BTreeSet<String> {
    let mut unknown = BTreeSet::new();

    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.insert(key.clone());
            continue;
        }
        if let ("build" | "test", toml::Value::Table(step)) = (key.as_str(), value) {
            for nested in step.keys() {
                if !KNOWN_STEP_KEYS.contains(&nested.as_str()) {
                    unknown.insert(format!("{key}.{nested}"));
                }
            }
        }
    }

    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "presto: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn config_error(message: String, path: &Path) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
