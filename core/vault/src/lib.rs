//! Vault encryption engine for Lockbox.
//!
//! This module provides:
//! - Password-derived authenticated file encryption and decryption
//! - A per-engine key cache that memoizes expensive derivations
//! - The storage-safe serialized record format and its codec
//! - Async glue toward the external blob store
//!
//! # Architecture
//! The engine sits between the caller (UI, CLI) and the storage collaborator,
//! handling all key derivation, encryption and integrity checking; storage
//! only ever sees opaque serialized records.

pub mod cache;
pub mod codec;
pub mod engine;
pub mod record;
pub mod store;

pub use cache::KeyCache;
pub use engine::VaultEngine;
pub use record::EncryptedRecord;
pub use store::VaultStore;
