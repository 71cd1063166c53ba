/// Failure of a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
	/// The backend cannot be reached at all (e.g. storage disabled by the browser).
	#[error("storage is unavailable: {0}")]
	Unavailable(String),
	/// A write would exceed the backend's capacity.
	#[error("storage quota of {limit} bytes exceeded")]
	QuotaExceeded { limit: usize },
	#[error("storage I/O failed: {0}")]
	Io(#[from] std::io::Error),
}

/// Failure to persist a setting.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("failed to encode setting `{key}`: {source}")]
	Encode {
		key: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("failed to write setting `{key}`: {source}")]
	Storage {
		key: String,
		#[source]
		source: StorageError,
	},
}
