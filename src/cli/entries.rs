//! Entry commands.
//!
//! Implements add, list and rm for a section.

use std::path::Path;

use tracing::info;

use crate::cli::resolve::Context;
use crate::cli::{output, prompt};
use crate::core::domain::{Listing, Section};
use crate::error::Result;

/// Add an entry.
pub fn add(home: Option<&Path>, section: Section, title: &str, content: Option<String>) -> Result<()> {
    info!(%section, "adding entry");
    let ctx = Context::load(home)?;
    let mut vault = ctx.open_vault()?;
    let session = prompt::unlock(&vault)?;
    let content = prompt::content(title, content)?;

    let handle = vault.add_entry(section, title, &content, session.passphrase()?)?;

    output::success(&format!(
        "added {} to {} (#{})",
        output::name(title),
        section,
        handle.index()
    ));
    Ok(())
}

/// List and decrypt a section.
pub fn list(home: Option<&Path>, section: Section, json: bool) -> Result<()> {
    let ctx = Context::load(home)?;
    let mut vault = ctx.open_vault()?;
    let session = prompt::unlock(&vault)?;

    let listing = vault.list_entries(section, session.passphrase()?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&listing))?);
        return Ok(());
    }

    if listing.total() == 0 {
        output::dimmed(&format!("no entries in {}", section));
        return Ok(());
    }

    output::section(&format!("{} ({})", section.title(), listing.total()));
    for entry in &listing.entries {
        output::list_item(&format!(
            "[{}] {}  {}",
            entry.index,
            output::name(&entry.title),
            entry.created_at.format("%Y-%m-%d %H:%M")
        ));
        for line in entry.content.lines() {
            println!("      {}", line);
        }
    }
    for failure in &listing.failures {
        output::warn(&format!(
            "[{}] {} could not be decrypted: {}",
            failure.index, failure.title, failure.error
        ));
    }

    Ok(())
}

/// Remove the entry at `index`.
pub fn rm(home: Option<&Path>, section: Section, index: usize) -> Result<()> {
    info!(%section, index, "removing entry");
    let ctx = Context::load(home)?;
    let mut vault = ctx.open_vault()?;
    let session = prompt::unlock(&vault)?;

    let removed = vault.remove_entry(section, index, session.passphrase()?)?;

    output::success(&format!(
        "removed {} from {}",
        output::name(&removed.title),
        section
    ));
    Ok(())
}

fn to_json(listing: &Listing) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = listing
        .entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "index": e.index,
                "title": e.title,
                "content": e.content.as_str(),
                "createdAt": e.created_at.to_rfc3339(),
            })
        })
        .collect();
    let failures: Vec<serde_json::Value> = listing
        .failures
        .iter()
        .map(|f| {
            serde_json::json!({
                "index": f.index,
                "title": f.title,
                "error": f.error.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "section": listing.section,
        "count": listing.total(),
        "entries": entries,
        "failures": failures,
    })
}
