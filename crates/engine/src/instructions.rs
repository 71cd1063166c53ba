use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::serialized::decode;
use crate::{EngineError, Value};

/// Block name under which the top-level program is reported.
pub const ROOT_BLOCK: &str = "<root>";

/// Compiled programs keyed by block name, in no particular order.
pub type BlockInstructions = HashMap<String, Vec<Instruction>>;

/// One operation of a compiled program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
	/// Operation name, e.g. `EmitRaw` or `Lookup`.
	pub op: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub arg: Option<Value>,
}

impl Instruction {
	pub fn new(op: impl Into<String>, arg: Option<Value>) -> Self {
		Self { op: op.into(), arg }
	}

	pub(crate) fn from_serialized(value: serde_json::Value) -> Result<Self, EngineError> {
		let raw: RawInstruction = decode(value)?;
		Ok(Self {
			op: raw.op,
			arg: raw.arg.map(Value::from),
		})
	}
}

/// Serialized instruction: `{"op": ..., "arg": ...}`, arg absent for operations without one.
#[derive(Deserialize)]
struct RawInstruction {
	op: String,
	#[serde(default)]
	arg: Option<serde_json::Value>,
}
