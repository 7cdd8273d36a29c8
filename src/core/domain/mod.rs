//! Domain types.

mod entry;
mod listing;
mod section;
pub mod settings;
mod status;

pub use entry::{Entry, EntryHandle, StoredEntry};
pub use listing::{DecryptFailure, Listing};
pub use section::Section;
pub use settings::SecuritySettings;
pub use status::{AccessMode, LifeStatus, Report, Signal};
