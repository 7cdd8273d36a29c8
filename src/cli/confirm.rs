//! Confirm command - record that the owner is alive.

use std::path::Path;

use chrono::Utc;

use crate::cli::resolve::Context;
use crate::cli::{output, prompt};
use crate::core::vault::Vault;
use crate::error::Result;

/// Verify the passphrase, then record a life confirmation.
///
/// Ungated: this is how an owner leaves beneficiary-release mode.
pub fn execute(home: Option<&Path>) -> Result<()> {
    let ctx = Context::load(home)?;
    let vault = Vault::open(ctx.store.clone())?;
    prompt::unlock(&vault)?;

    let monitor = ctx.monitor()?;
    let at = monitor.confirm(Utc::now())?;

    output::success("life confirmed");
    match monitor.schedule().overdue_at(at) {
        Some(next) => output::kv("next due", next.format("%Y-%m-%d %H:%M UTC")),
        None => output::kv("next due", "never"),
    }
    Ok(())
}
