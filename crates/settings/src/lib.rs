#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Persisted playground settings.
//!
//! [`SettingsStore`] maps setting names onto namespaced keys
//! (`<namespace>:<name>`) and JSON-encodes their values into a [`Storage`]
//! backend. Reads never fail: an unavailable backend, a missing key or an
//! undecodable value all yield the caller's fallback. Writes report failures
//! as [`SettingsError`] so callers can log them, but a failed write never has
//! to interrupt the caller.

mod error;
mod file;
mod memory;
mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use error::{SettingsError, StorageError};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use storage::Storage;
pub use store::{DEFAULT_NAMESPACE, SettingsStore};
