//! Test support utilities for keepsake integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Passphrase used by every test vault.
pub const PASSPHRASE: &str = "correct horse battery staple";

/// Iteration count for test vaults, low to keep tests fast.
pub const ITERATIONS: u32 = 1_000;

/// Test environment with an isolated keepsake home.
///
/// No process-global state is mutated; child processes get the home
/// through `KEEPSAKE_HOME` so tests can run in parallel.
pub struct Test {
    /// Temporary keepsake home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new, uninitialized test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with a vault initialized.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize vault: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment with entries in `section`.
    pub fn with_entries(section: &str, entries: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (title, content) in entries {
            let output = t.add(section, title, content);
            assert!(
                output.status.success(),
                "Failed to add entry {}: {}",
                title,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of a file under the data directory.
    pub fn data_file(&self, key: &str) -> PathBuf {
        self.home.path().join("data").join(key)
    }
}
