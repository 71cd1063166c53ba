use std::collections::BTreeMap;

use crate::{Storage, StorageError};

/// In-process storage, lost when dropped.
///
/// An optional byte quota (keys plus values) mimics the browser's
/// `QuotaExceededError`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
	items: BTreeMap<String, String>,
	quota: Option<usize>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates storage that rejects writes once `limit` bytes would be stored.
	pub fn with_quota(limit: usize) -> Self {
		Self {
			items: BTreeMap::new(),
			quota: Some(limit),
		}
	}

	/// Returns the raw stored text, bypassing any namespace.
	pub fn raw(&self, key: &str) -> Option<&str> {
		self.items.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	fn used_bytes_without(&self, key: &str) -> usize {
		self.items
			.iter()
			.filter(|(k, _)| k.as_str() != key)
			.map(|(k, v)| k.len() + v.len())
			.sum()
	}
}

impl Storage for MemoryStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.items.get(key).cloned())
	}

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		if let Some(limit) = self.quota
			&& self.used_bytes_without(key) + key.len() + value.len() > limit
		{
			return Err(StorageError::QuotaExceeded { limit });
		}
		self.items.insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
		self.items.remove(key);
		Ok(())
	}
}
