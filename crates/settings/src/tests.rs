use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

/// Backend that behaves like storage disabled by the browser.
struct Unavailable;

impl Storage for Unavailable {
	fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
		Err(StorageError::Unavailable("disabled".into()))
	}

	fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
		Err(StorageError::Unavailable("disabled".into()))
	}

	fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
		Err(StorageError::Unavailable("disabled".into()))
	}
}

#[test]
fn keys_are_namespaced() {
	let mut store = SettingsStore::new(MemoryStorage::new());
	store.set("contextPaneWidth", &420).unwrap();
	assert_eq!(store.storage().raw("minijinja-playground:contextPaneWidth"), Some("420"));
	assert_eq!(store.storage().raw("contextPaneWidth"), None);
}

#[test]
fn custom_namespace_isolates_settings() {
	let mut a = SettingsStore::with_namespace(MemoryStorage::new(), "a");
	a.set("width", &1).unwrap();
	let b = SettingsStore::with_namespace(a.into_storage(), "b");
	assert_eq!(b.get("width", 7), 7);
}

#[test]
fn absent_key_returns_fallback() {
	let store = SettingsStore::new(MemoryStorage::new());
	assert_eq!(store.get("missing", 350u32), 350);
}

#[test]
fn corrupted_value_returns_fallback() {
	let mut storage = MemoryStorage::new();
	storage.set_item("minijinja-playground:width", "{not json").unwrap();
	let store = SettingsStore::new(storage);
	assert_eq!(store.get("width", 350u32), 350);
}

#[test]
fn mistyped_value_returns_fallback() {
	let mut store = SettingsStore::new(MemoryStorage::new());
	store.set("width", "wide").unwrap();
	assert_eq!(store.get("width", 350u32), 350);
}

#[test]
fn unavailable_storage_reads_fallback_and_reports_writes() {
	let mut store = SettingsStore::new(Unavailable);
	assert_eq!(store.get("width", 12), 12);
	let err = store.set("width", &13).unwrap_err();
	assert!(matches!(err, SettingsError::Storage { source: StorageError::Unavailable(_), .. }));
	assert!(store.remove("width").is_err());
}

#[test]
fn quota_exceeded_keeps_previous_value() {
	let mut store = SettingsStore::with_namespace(MemoryStorage::with_quota(16), "ns");
	store.set("w", &1).unwrap();
	let err = store.set("w", &"x".repeat(64)).unwrap_err();
	assert!(matches!(err, SettingsError::Storage { source: StorageError::QuotaExceeded { limit: 16 }, .. }));
	assert_eq!(store.get("w", 0), 1);
}

#[test]
fn remove_restores_fallback() {
	let mut store = SettingsStore::new(MemoryStorage::new());
	store.set("width", &5).unwrap();
	store.remove("width").unwrap();
	assert_eq!(store.get("width", 9), 9);
	assert!(store.storage().is_empty());
}

#[test]
fn boxed_storage_is_a_storage() {
	let mut store = SettingsStore::new(Box::new(MemoryStorage::new()) as Box<dyn Storage>);
	store.set("k", &[1, 2]).unwrap();
	assert_eq!(store.get("k", Vec::<i32>::new()), vec![1, 2]);
}

#[test]
fn values_written_behind_the_store_are_read_back() {
	let mut store = SettingsStore::new(MemoryStorage::new());
	store.storage_mut().set_item("minijinja-playground:width", "12").unwrap();
	assert_eq!(store.get("width", 0u32), 12);
}

#[test]
fn data_dir_storage_is_scoped_to_the_app() {
	if let Some(storage) = FileStorage::in_data_dir("playground-test") {
		assert!(storage.path().ends_with("playground-test/settings.json"));
	}
}

#[test]
fn file_storage_survives_reopen() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nested").join("settings.json");

	let mut store = SettingsStore::new(FileStorage::new(&path));
	store.set("contextPaneWidth", &512).unwrap();
	store.set("outputPaneHeight", &240).unwrap();

	let reopened = SettingsStore::new(FileStorage::new(&path));
	assert_eq!(reopened.get("contextPaneWidth", 0), 512);
	assert_eq!(reopened.get("outputPaneHeight", 0), 240);
}

#[test]
fn corrupt_settings_file_reads_as_empty() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("settings.json");
	std::fs::write(&path, "]]").unwrap();

	let mut store = SettingsStore::new(FileStorage::new(&path));
	assert_eq!(store.get("width", 3), 3);
	store.set("width", &4).unwrap();
	assert_eq!(store.get("width", 3), 4);
}

#[test]
fn file_storage_remove_of_absent_key_is_ok() {
	let dir = tempfile::tempdir().unwrap();
	let mut storage = FileStorage::new(dir.path().join("settings.json"));
	storage.remove_item("nope").unwrap();
	assert!(!storage.path().exists());
}

proptest! {
	#[test]
	fn round_trip_integers(value in any::<i64>(), fallback in any::<i64>()) {
		let mut store = SettingsStore::new(MemoryStorage::new());
		store.set("k", &value).unwrap();
		prop_assert_eq!(store.get("k", fallback), value);
	}

	#[test]
	fn round_trip_strings(value in ".*", fallback in ".*") {
		let mut store = SettingsStore::new(MemoryStorage::new());
		store.set("k", &value).unwrap();
		prop_assert_eq!(store.get("k", fallback), value);
	}

	#[test]
	fn round_trip_lists(value in proptest::collection::vec(any::<bool>(), 0..8)) {
		let mut store = SettingsStore::new(MemoryStorage::new());
		store.set("k", &value).unwrap();
		prop_assert_eq!(store.get("k", vec![true]), value);
	}
}
