// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by presto.

/// Generated variable name constants.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Log filter from `PRESTO_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(names::PRESTO_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
