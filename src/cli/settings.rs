//! Settings command - view or change security settings.

use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::cli::resolve::Context;
use crate::cli::{output, prompt};
use crate::core::domain::SecuritySettings;
use crate::core::vault::Vault;
use crate::error::Result;

/// On/off switch for a setting.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        self == Toggle::On
    }
}

/// Requested settings changes.
#[derive(Debug, Default)]
pub struct Changes {
    pub biometrics: Option<Toggle>,
    pub push: Option<Toggle>,
    pub weekly: Option<Toggle>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.biometrics.is_none() && self.push.is_none() && self.weekly.is_none()
    }

    fn apply(&self, settings: &mut SecuritySettings) {
        if let Some(t) = self.biometrics {
            settings.biometrics_enabled = t.enabled();
        }
        if let Some(t) = self.push {
            settings.push_notifications_enabled = t.enabled();
        }
        if let Some(t) = self.weekly {
            settings.weekly_confirmation_enabled = t.enabled();
        }
    }
}

/// Show settings, applying `changes` first if any were given.
///
/// Changing settings requires the passphrase; viewing does not.
pub fn execute(home: Option<&Path>, changes: Changes) -> Result<()> {
    let ctx = Context::load(home)?;
    let mut settings = SecuritySettings::load(ctx.store.as_ref())?;

    if !changes.is_empty() {
        let vault = Vault::open(ctx.store.clone())?;
        prompt::unlock(&vault)?;

        changes.apply(&mut settings);
        settings.save(ctx.store.as_ref())?;
        info!(?settings, "settings updated");
        output::success("settings saved");
    }

    output::section("Security Settings");
    output::kv("biometrics", on_off(settings.biometrics_enabled));
    output::kv("push", on_off(settings.push_notifications_enabled));
    output::kv("weekly", on_off(settings.weekly_confirmation_enabled));
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
