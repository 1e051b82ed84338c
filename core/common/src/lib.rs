//! Common types shared across Lockbox crates.
//!
//! This module provides the error taxonomy and foundational identifier types
//! used throughout the codebase, ensuring consistency and type safety.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::RecordId;
