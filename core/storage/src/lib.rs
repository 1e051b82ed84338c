//! Storage collaborator interface for Lockbox.
//!
//! The encryption core hands serialized records to an external key-value
//! store as opaque strings and reads them back verbatim. This crate defines
//! that boundary and ships an in-memory implementation for tests and
//! development.

pub mod memory;
pub mod provider;

pub use memory::MemoryStore;
pub use provider::BlobStore;
