//! Keepsake - an encrypted vault for what you leave behind.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keepsake::cli::output;
use keepsake::cli::{execute, Cli};
use keepsake::error::{AuthError, ConfigError, Error, StoreError, VaultError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KEEPSAKE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keepsake=debug")
        } else {
            EnvFilter::new("keepsake=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.home) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::NotInitialized) | Error::Vault(VaultError::NotInitialized) => {
            Some("run: keepsake init")
        }
        Error::Config(ConfigError::AlreadyInitialized) => {
            Some("use --home to create a vault somewhere else")
        }
        Error::Auth(AuthError::InvalidPassphrase) => {
            Some("check the passphrase or KEEPSAKE_PASSPHRASE")
        }
        Error::Vault(VaultError::IndexOutOfRange { .. }) => {
            Some("indices shift after removal: run keepsake list to see them")
        }
        Error::Store(StoreError::Timeout(_)) => Some("the store did not respond, try again"),
        _ => None,
    }
}
