//! Core library components.
//!
//! This module contains the reusable logic for key derivation, envelope
//! encryption, the entry vault, life confirmation and persistence.

pub mod auth;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod kdf;
pub mod monitor;
pub mod progress;
pub mod store;
pub mod types;
pub mod validation;
pub mod vault;
