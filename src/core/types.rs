//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A logical key in the external key-value store (e.g. `entries_wishes`).
pub type StoreKey = String;

/// An envelope serialized as JSON, as stored in an entry's `content` field.
pub type SealedEnvelope = String;

/// Owner-assigned entry title.
pub type Title = String;
