//! Settings file on disk.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::{Storage, StorageError};

const FILE_NAME: &str = "settings.json";

/// Storage backed by a single JSON object file.
///
/// The file is read on every access and rewritten through a temporary file in
/// the same directory, so a crash mid-write leaves the previous contents intact.
/// A missing file reads as empty; so does a corrupt one.
#[derive(Debug, Clone)]
pub struct FileStorage {
	path: PathBuf,
}

impl FileStorage {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Returns storage at `<data dir>/<app>/settings.json`, if the platform has a data directory.
	pub fn in_data_dir(app: &str) -> Option<Self> {
		dirs::data_dir().map(|dir| Self::new(dir.join(app).join(FILE_NAME)))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
		let text = match std::fs::read_to_string(&self.path) {
			Ok(text) => text,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
			Err(e) => return Err(e.into()),
		};
		match serde_json::from_str(&text) {
			Ok(items) => Ok(items),
			Err(e) => {
				warn!(path = %self.path.display(), error = %e, "Discarding unreadable settings file");
				Ok(BTreeMap::new())
			}
		}
	}

	fn store(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
		let dir = match self.path.parent() {
			Some(dir) if !dir.as_os_str().is_empty() => dir,
			_ => Path::new("."),
		};
		std::fs::create_dir_all(dir)?;
		let text = serde_json::to_vec_pretty(items).map_err(std::io::Error::other)?;
		let mut temp = NamedTempFile::new_in(dir)?;
		temp.write_all(&text)?;
		temp.persist(&self.path).map_err(|e| e.error)?;
		Ok(())
	}
}

impl Storage for FileStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.load()?.remove(key))
	}

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		let mut items = self.load()?;
		items.insert(key.to_owned(), value.to_owned());
		self.store(&items)
	}

	fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
		let mut items = self.load()?;
		if items.remove(key).is_some() {
			self.store(&items)?;
		}
		Ok(())
	}
}
