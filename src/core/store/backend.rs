//! Backend selection for the keepsake home directory.
//!
//! The CLI persists to the filesystem under `<home>/data`, with every call
//! bounded by the configured store timeout.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::{Deadline, Filesystem, Store};
use crate::core::config::Config;
use crate::error::Result;

/// Default backend for a home directory.
///
/// # Errors
///
/// Returns `StoreError::Unavailable` if the store worker cannot start.
pub fn default_backend(home: &Path, config: &Config) -> Result<Arc<dyn Store>> {
    let root = Config::data_dir(home);
    info!(root = %root.display(), timeout_ms = config.store.timeout_ms, "using filesystem store");

    let fs: Arc<dyn Store> = Arc::new(Filesystem::new(root));
    let bounded = Deadline::new(fs, Duration::from_millis(config.store.timeout_ms))?;
    Ok(Arc::new(bounded))
}
