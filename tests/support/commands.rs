//! Command helper methods for Test.

use super::{Test, ITERATIONS, PASSPHRASE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keepsake command bound to this test's home.
    ///
    /// Returns a Command configured with:
    /// - KEEPSAKE_HOME set to the temporary home directory
    /// - KEEPSAKE_PASSPHRASE set to [`PASSPHRASE`]
    /// - colors and log overrides disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keepsake").expect("failed to find keepsake binary");
        cmd.env("KEEPSAKE_HOME", self.home.path());
        cmd.env("KEEPSAKE_PASSPHRASE", PASSPHRASE);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("KEEPSAKE_LOG");
        cmd
    }

    /// Same as [`Test::cmd`] with a different passphrase.
    pub fn cmd_with_passphrase(&self, passphrase: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("KEEPSAKE_PASSPHRASE", passphrase);
        cmd
    }

    /// Shortcut for `keepsake init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .args(["init", "--iterations", &ITERATIONS.to_string()])
            .output()
            .expect("failed to run keepsake init")
    }

    /// Shortcut for `keepsake add`.
    pub fn add(&self, section: &str, title: &str, content: &str) -> Output {
        self.cmd()
            .args(["add", section, title, "--content", content])
            .output()
            .expect("failed to run keepsake add")
    }

    /// Shortcut for `keepsake list`.
    pub fn list(&self, section: &str) -> Output {
        self.cmd()
            .args(["list", section])
            .output()
            .expect("failed to run keepsake list")
    }

    /// Shortcut for `keepsake list --json`.
    pub fn list_json(&self, section: &str) -> Output {
        self.cmd()
            .args(["list", section, "--json"])
            .output()
            .expect("failed to run keepsake list --json")
    }

    /// Shortcut for `keepsake rm`.
    pub fn rm(&self, section: &str, index: usize) -> Output {
        self.cmd()
            .args(["rm", section, &index.to_string()])
            .output()
            .expect("failed to run keepsake rm")
    }

    /// Shortcut for `keepsake confirm`.
    pub fn confirm(&self) -> Output {
        self.cmd()
            .arg("confirm")
            .output()
            .expect("failed to run keepsake confirm")
    }

    /// Shortcut for `keepsake status --json`.
    pub fn status_json(&self) -> Output {
        self.cmd()
            .args(["status", "--json"])
            .output()
            .expect("failed to run keepsake status")
    }
}
