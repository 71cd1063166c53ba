//! Decoding of the engine's serialized machinery types.
//!
//! Tokens serialize adjacently tagged (`{"name": "Ident", "payload": "x"}`),
//! instructions likewise (`{"op": "Lookup", "arg": "x"}`), and unit variants
//! drop the content key. Spans are plain structs with 0-based columns.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::EngineError;

/// Serializes an engine value into JSON.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, EngineError> {
	Ok(serde_json::to_value(value)?)
}

/// Decodes serialized engine output into a type mirroring its shape.
pub(crate) fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, EngineError> {
	Ok(serde_json::from_value(value)?)
}
