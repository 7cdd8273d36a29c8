//! Status command.
//!
//! Shows life-confirmation status and setup progress. Never asks for the
//! passphrase.

use std::path::Path;

use chrono::Utc;

use crate::cli::output;
use crate::cli::resolve::Context;
use crate::core::domain::{LifeStatus, SecuritySettings, Signal};
use crate::core::progress;
use crate::error::Result;

/// Show status overview.
pub fn execute(home: Option<&Path>, json: bool) -> Result<()> {
    let ctx = Context::load(home)?;
    let settings = SecuritySettings::load(ctx.store.as_ref())?;
    let monitor = ctx.monitor()?;

    let now = Utc::now();
    let report = monitor.report(now);
    let signal = monitor.signal(now, &settings);
    let progress = progress::evaluate(ctx.store.as_ref())?;

    if json {
        let result = serde_json::json!({
            "status": report.status,
            "access": report.access,
            "signal": signal,
            "lastConfirmedAt": report.last_confirmed_at.map(|t| t.to_rfc3339()),
            "overdueAt": report.overdue_at.map(|t| t.to_rfc3339()),
            "unreachableAt": report.unreachable_at.map(|t| t.to_rfc3339()),
            "intervalDays": monitor.schedule().interval_days(),
            "hardCutoffDays": monitor.schedule().hard_cutoff_days(),
            "progress": {
                "percent": progress.percent(),
                "done": progress.done(),
                "total": progress.total(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section("Keepsake Status");
    output::kv("home", ctx.home.display());
    output::kv("status", report.status);
    match report.last_confirmed_at {
        Some(t) => output::kv("confirmed", t.format("%Y-%m-%d %H:%M UTC")),
        None => output::kv("confirmed", "never"),
    }
    if let Some(t) = report.overdue_at {
        output::kv("due", t.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(t) = report.unreachable_at {
        output::kv("release", t.format("%Y-%m-%d %H:%M UTC"));
    }
    output::kv(
        "setup",
        format!(
            "{}% ({}/{})",
            progress.percent(),
            progress.done(),
            progress.total()
        ),
    );
    for (section, count) in &progress.sections {
        output::list_item(&format!("{}: {}", section, count));
    }

    match signal {
        Signal::Quiet => {}
        Signal::PromptOwner => {
            if report.status == LifeStatus::NeedsFirstConfirmation {
                output::warn("no life confirmation recorded yet");
            } else {
                output::warn("life confirmation is overdue");
            }
            output::hint(&format!("run: {}", output::cmd("keepsake confirm")));
        }
        Signal::ReleaseToBeneficiaries => {
            output::warn("owner presumed unreachable: beneficiary release is due");
        }
    }

    Ok(())
}
