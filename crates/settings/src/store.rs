use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{SettingsError, Storage};

/// Prefix applied to every key written by the playground.
pub const DEFAULT_NAMESPACE: &str = "minijinja-playground";

/// Namespaced, JSON-encoded access to a [`Storage`] backend.
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
	storage: S,
	namespace: String,
}

impl<S: Storage> SettingsStore<S> {
	/// Creates a store under [`DEFAULT_NAMESPACE`].
	pub fn new(storage: S) -> Self {
		Self::with_namespace(storage, DEFAULT_NAMESPACE)
	}

	pub fn with_namespace(storage: S, namespace: impl Into<String>) -> Self {
		Self {
			storage,
			namespace: namespace.into(),
		}
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Returns the storage key used for the setting `name`.
	pub fn key(&self, name: &str) -> String {
		format!("{}:{name}", self.namespace)
	}

	/// Reads the setting `name`, or returns `fallback` if it cannot be read or decoded.
	pub fn get<T: DeserializeOwned>(&self, name: &str, fallback: T) -> T {
		let key = self.key(name);
		let text = match self.storage.get_item(&key) {
			Ok(Some(text)) => text,
			Ok(None) => return fallback,
			Err(e) => {
				debug!(key = %key, error = %e, "Settings storage unavailable, using default");
				return fallback;
			}
		};
		match serde_json::from_str(&text) {
			Ok(value) => value,
			Err(e) => {
				debug!(key = %key, error = %e, "Stored setting is malformed, using default");
				fallback
			}
		}
	}

	/// Writes `value` under the setting `name`.
	pub fn set<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> Result<(), SettingsError> {
		let key = self.key(name);
		let text = match serde_json::to_string(value) {
			Ok(text) => text,
			Err(source) => return Err(SettingsError::Encode { key, source }),
		};
		self.storage
			.set_item(&key, &text)
			.map_err(|source| SettingsError::Storage { key, source })
	}

	/// Deletes the setting `name`.
	pub fn remove(&mut self, name: &str) -> Result<(), SettingsError> {
		let key = self.key(name);
		self.storage
			.remove_item(&key)
			.map_err(|source| SettingsError::Storage { key, source })
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	pub fn storage_mut(&mut self) -> &mut S {
		&mut self.storage
	}

	pub fn into_storage(self) -> S {
		self.storage
	}
}
