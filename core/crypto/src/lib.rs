//! Cryptographic primitives for Lockbox.
//!
//! This module provides:
//! - Password-based key derivation using PBKDF2-HMAC-SHA256
//! - Authenticated encryption using AES-256-GCM
//! - SHA-256 plaintext checksums for defense-in-depth integrity checks
//! - A fail-closed secure random source
//! - Password strength estimation and generation
//!
//! # Security Guarantees
//! - All key material is automatically zeroized on drop
//! - No plaintext or key material is ever logged
//! - Constant-time comparison for checksum verification

pub mod aead;
pub mod checksum;
pub mod kdf;
pub mod keys;
pub mod password;
pub mod rng;

pub use aead::{decrypt, encrypt, IV_LENGTH, TAG_LENGTH};
pub use checksum::checksum;
pub use kdf::{derive_key, PBKDF2_ITERATIONS};
pub use keys::{Salt, VaultKey, KEY_LENGTH, SALT_LENGTH};
pub use rng::{random_array, random_bytes};
