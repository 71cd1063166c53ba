//! Tagged dynamic values.
//!
//! [`Value`] mirrors the JSON data model. Mappings keep insertion order so
//! contexts and syntax trees display fields in the order they were written.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A JSON-shaped value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Number(Number),
	String(String),
	Seq(Vec<Value>),
	Map(IndexMap<String, Value>),
}

/// A numeric value, kept in the widest lossless representation available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
	Int(i64),
	UInt(u64),
	Float(f64),
}

impl Value {
	/// Parses JSON text into a value.
	pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<serde_json::Value>(text).map(Self::from)
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Number(Number::Int(n)) => Some(*n),
			Value::Number(Number::UInt(n)) => i64::try_from(*n).ok(),
			_ => None,
		}
	}

	pub fn as_seq(&self) -> Option<&[Value]> {
		match self {
			Value::Seq(items) => Some(items),
			_ => None,
		}
	}

	/// Looks up `key` when this value is a mapping.
	pub fn get(&self, key: &str) -> Option<&Value> {
		match self {
			Value::Map(map) => map.get(key),
			_ => None,
		}
	}
}

impl From<serde_json::Number> for Number {
	fn from(n: serde_json::Number) -> Self {
		if let Some(i) = n.as_i64() {
			Number::Int(i)
		} else if let Some(u) = n.as_u64() {
			Number::UInt(u)
		} else {
			Number::Float(n.as_f64().unwrap_or(f64::NAN))
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => Value::Number(n.into()),
			serde_json::Value::String(s) => Value::String(s),
			serde_json::Value::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(map) => Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Self {
		Value::Number(Number::Int(n))
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::String(s.to_owned())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(s)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::Seq(items)
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Int(n) => write!(f, "{n}"),
			Number::UInt(n) => write!(f, "{n}"),
			Number::Float(n) => write!(f, "{n:?}"),
		}
	}
}

/// Compact JSON.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Bool(b) => write!(f, "{b}"),
			Value::Number(n) => write!(f, "{n}"),
			Value::String(s) => write!(f, "{}", serde_json::Value::String(s.clone())),
			Value::Seq(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Value::Map(map) => {
				f.write_str("{")?;
				for (idx, (key, item)) in map.iter().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}:{item}", serde_json::Value::String(key.clone()))?;
				}
				f.write_str("}")
			}
		}
	}
}
