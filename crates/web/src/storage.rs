use playground_settings::{Storage, StorageError};
use wasm_bindgen::JsValue;

/// [`Storage`] over `window.localStorage`.
///
/// Browsers may deny storage (private windows, disabled cookies). A detached
/// instance then reports [`StorageError::Unavailable`] for every call and the
/// settings store falls back to defaults.
pub struct LocalStorage {
	inner: Option<web_sys::Storage>,
}

impl LocalStorage {
	/// Binds to the page's local storage, or detaches if it cannot be reached.
	pub fn new() -> Self {
		let inner = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
		if inner.is_none() {
			tracing::warn!("localStorage unavailable, pane sizes will not persist");
		}
		Self { inner }
	}

	pub fn detached() -> Self {
		Self { inner: None }
	}

	pub fn is_attached(&self) -> bool {
		self.inner.is_some()
	}

	fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
		self.inner
			.as_ref()
			.ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_owned()))
	}
}

impl Default for LocalStorage {
	fn default() -> Self {
		Self::new()
	}
}

fn js_error(err: JsValue) -> StorageError {
	StorageError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl Storage for LocalStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		self.storage()?.get_item(key).map_err(js_error)
	}

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		self.storage()?.set_item(key, value).map_err(js_error)
	}

	fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
		self.storage()?.remove_item(key).map_err(js_error)
	}
}
