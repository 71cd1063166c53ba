use crate::StorageError;

/// A string key/value backend, shaped after the browser's `localStorage`.
pub trait Storage {
	/// Returns the stored text for `key`, or `None` if absent.
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

	/// Deletes `key`. Removing an absent key succeeds.
	fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		(**self).get_item(key)
	}

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		(**self).set_item(key, value)
	}

	fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
		(**self).remove_item(key)
	}
}
