use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serialized::decode;
use crate::{EngineError, Value};

/// One lexical token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
	/// Token kind, e.g. `TemplateData`, `VariableStart` or `Ident`.
	pub name: String,
	/// Literal carried by the token, if its kind has one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payload: Option<Value>,
}

impl Token {
	pub fn new(name: impl Into<String>, payload: Option<Value>) -> Self {
		Self { name: name.into(), payload }
	}

	pub(crate) fn from_serialized(value: serde_json::Value) -> Result<Self, EngineError> {
		let raw: RawToken = decode(value)?;
		Ok(Self {
			name: raw.name,
			payload: raw.payload.map(Value::from),
		})
	}
}

/// Serialized token: `{"name": ..., "payload": ...}`, payload absent for unit kinds.
#[derive(Deserialize)]
struct RawToken {
	name: String,
	#[serde(default)]
	payload: Option<serde_json::Value>,
}

/// Source range of a token.
///
/// Lines and columns are 1-based; the start is inclusive and the end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
	pub start_line: u32,
	pub start_col: u32,
	pub end_line: u32,
	pub end_col: u32,
}

impl Span {
	pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
		Self {
			start_line,
			start_col,
			end_line,
			end_col,
		}
	}

	/// Converts an engine span, whose columns count from zero.
	pub(crate) fn from_serialized(value: serde_json::Value) -> Result<Self, EngineError> {
		let raw: RawSpan = decode(value)?;
		Ok(Self {
			start_line: raw.start_line,
			start_col: raw.start_col.saturating_add(1),
			end_line: raw.end_line,
			end_col: raw.end_col.saturating_add(1),
		})
	}
}

impl fmt::Display for Span {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}-{}:{}", self.start_line, self.start_col, self.end_line, self.end_col)
	}
}

/// Serialized span. Byte offsets are ignored.
#[derive(Deserialize)]
struct RawSpan {
	start_line: u32,
	start_col: u32,
	end_line: u32,
	end_col: u32,
}
