//! Command-line interface.

pub mod completions;
pub mod confirm;
pub mod entries;
pub mod init;
pub mod output;
pub mod prompt;
pub mod resolve;
pub mod settings;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::HOME_ENV;
use crate::core::domain::Section;
use settings::Toggle;

/// Keepsake - an encrypted vault for what you leave behind.
#[derive(Parser)]
#[command(
    name = "keepsake",
    about = "An encrypted vault for what you leave behind",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keepsake home directory (default: ~/.keepsake)
    #[arg(long, global = true, env = HOME_ENV)]
    pub home: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the configuration and an empty vault
    Init {
        /// PBKDF2 iteration count for the new vault
        #[arg(long)]
        iterations: Option<u32>,
        /// Days between required life confirmations
        #[arg(long)]
        interval_days: Option<u32>,
        /// Days without confirmation before beneficiaries are released
        #[arg(long)]
        hard_cutoff_days: Option<u32>,
    },

    /// Add an entry to a section
    Add {
        /// Section: passwords, wishes, financial or confessions
        section: Section,
        /// Entry title (stored unencrypted)
        title: String,
        /// Entry content (prompted or read from stdin when omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Decrypt and list the entries of a section
    List {
        /// Section: passwords, wishes, financial or confessions
        section: Section,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the entry at an index
    Rm {
        /// Section: passwords, wishes, financial or confessions
        section: Section,
        /// Index shown by `keepsake list`
        index: usize,
    },

    /// Confirm that you are alive
    Confirm,

    /// Show life-confirmation status and setup progress
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or change security settings
    Settings {
        /// Allow biometric unlock
        #[arg(long, value_enum)]
        biometrics: Option<Toggle>,
        /// Deliver reminders as push notifications
        #[arg(long, value_enum)]
        push: Option<Toggle>,
        /// Prompt for periodic life confirmation
        #[arg(long, value_enum)]
        weekly: Option<Toggle>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Execute a command.
pub fn execute(command: Command, home: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let home = home.as_deref();
    match command {
        Init {
            iterations,
            interval_days,
            hard_cutoff_days,
        } => init::execute(
            home,
            init::InitOptions {
                iterations,
                interval_days,
                hard_cutoff_days,
            },
        ),
        Add {
            section,
            title,
            content,
        } => entries::add(home, section, &title, content),
        List { section, json } => entries::list(home, section, json),
        Rm { section, index } => entries::rm(home, section, index),
        Confirm => confirm::execute(home),
        Status { json } => status::execute(home, json),
        Settings {
            biometrics,
            push,
            weekly,
        } => settings::execute(
            home,
            settings::Changes {
                biometrics,
                push,
                weekly,
            },
        ),
        Completions { shell } => completions::execute(shell),
    }
}
