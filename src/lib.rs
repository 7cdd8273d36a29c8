//! Keepsake - an encrypted digital-inheritance vault.
//!
//! The owner records passwords, final wishes, financial details and
//! confessions. Every entry is encrypted at rest under a key derived from
//! the owner's passphrase. A life-confirmation monitor (a dead man's switch)
//! tracks when the owner last proved they are alive and decides when access
//! should pass to beneficiaries.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create config and vault
//! │   ├── add/list/rm   # Entry operations
//! │   ├── confirm       # Record life confirmation
//! │   ├── status        # Life status and setup progress
//! │   ├── settings      # Security settings
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── kdf           # PBKDF2 key derivation
//!     ├── cipher/       # Envelope codec
//!     │   ├── mod       # Cipher trait
//!     │   ├── envelope  # {encrypted, iv, salt} wire format
//!     │   └── aes       # AES-256-CBC + HMAC-SHA256
//!     ├── vault/        # Sections of encrypted entries
//!     ├── monitor       # Life-confirmation state machine
//!     ├── auth          # Auth gate and session
//!     ├── progress      # Setup progress
//!     ├── store/        # Key-value persistence
//!     │   ├── mod       # Store trait
//!     │   ├── fs        # One file per key
//!     │   ├── memory    # In-memory store
//!     │   └── deadline  # Timeout wrapper
//!     ├── domain/       # Sections, entries, statuses, settings
//!     └── config        # config.toml management
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use keepsake::core::domain::Section;
//! use keepsake::core::store::Memory;
//! use keepsake::core::vault::Vault;
//!
//! let mut vault = Vault::create(Arc::new(Memory::new()), "passphrase", 1_000)?;
//! vault.add_entry(Section::Wishes, "Music", "Play something loud", "passphrase")?;
//!
//! let listing = vault.list_entries(Section::Wishes, "passphrase")?;
//! assert_eq!(listing.entries[0].content.as_str(), "Play something loud");
//! # Ok::<(), keepsake::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
