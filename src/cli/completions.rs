//! Completions command.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell as Target};

use crate::cli::{Cli, Shell};
use crate::error::Result;

const BIN: &str = "keepsake";

impl From<Shell> for Target {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Target::Bash,
            Shell::Zsh => Target::Zsh,
            Shell::Fish => Target::Fish,
            Shell::PowerShell => Target::PowerShell,
            Shell::Elvish => Target::Elvish,
        }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    generate(Target::from(shell), &mut Cli::command(), BIN, out);
}

/// Print completions to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout());
    Ok(())
}
