use std::fmt::Write as _;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::Value;

/// A node of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
	/// A syntax node such as `Template`, `EmitExpr` or `Var`, with its named fields.
	Node { tag: String, fields: Vec<(String, AstNode)> },
	/// Named fields without a node tag.
	Record(Vec<(String, AstNode)>),
	List(Vec<AstNode>),
	/// Identifier, literal, or operator name.
	Leaf(Value),
}

impl AstNode {
	pub fn node(tag: impl Into<String>, fields: Vec<(String, AstNode)>) -> Self {
		AstNode::Node { tag: tag.into(), fields }
	}

	pub fn leaf(value: impl Into<Value>) -> Self {
		AstNode::Leaf(value.into())
	}

	/// Returns the node tag, if this is a tagged node.
	pub fn tag(&self) -> Option<&str> {
		match self {
			AstNode::Node { tag, .. } => Some(tag),
			_ => None,
		}
	}

	/// Looks up a named field of a node or record.
	pub fn field(&self, name: &str) -> Option<&AstNode> {
		match self {
			AstNode::Node { fields, .. } | AstNode::Record(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, node)| node),
			_ => None,
		}
	}

	/// Builds a tree from the engine's serialized syntax tree.
	///
	/// Statements and expressions serialize as `{"stmt"|"expr": tag, "node": {..}, "span": {..}}`
	/// and become tagged nodes with the inner fields; spans are dropped.
	pub(crate) fn from_serialized(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Object(mut map) => {
				if let Some(tag) = node_tag(&map) {
					let fields = match map.remove("node").unwrap_or_default() {
						serde_json::Value::Object(inner) => inner.into_iter().map(|(k, v)| (k, Self::from_serialized(v))).collect(),
						serde_json::Value::Null => Vec::new(),
						other => vec![("value".to_owned(), Self::from_serialized(other))],
					};
					return AstNode::Node { tag, fields };
				}
				if is_spanned(&map) {
					return Self::from_serialized(map.remove("node").unwrap_or_default());
				}
				AstNode::Record(map.into_iter().map(|(k, v)| (k, Self::from_serialized(v))).collect())
			}
			serde_json::Value::Array(items) => AstNode::List(items.into_iter().map(Self::from_serialized).collect()),
			scalar => AstNode::Leaf(Value::from(scalar)),
		}
	}

	/// Renders the tree as indented text, one field per line.
	pub fn pretty(&self) -> String {
		let mut out = String::new();
		self.write_node(&mut out, 0);
		out
	}

	fn write_node(&self, out: &mut String, level: usize) {
		match self {
			AstNode::Leaf(value) => {
				let _ = write!(out, "{value}");
			}
			AstNode::Node { tag, fields } => {
				out.push_str(tag);
				for (name, child) in fields {
					out.push('\n');
					pad(out, level + 1);
					write_field(out, name, child, level + 1);
				}
			}
			AstNode::Record(fields) if fields.is_empty() => out.push_str("{}"),
			AstNode::Record(fields) => {
				for (idx, (name, child)) in fields.iter().enumerate() {
					if idx > 0 {
						out.push('\n');
						pad(out, level);
					}
					write_field(out, name, child, level);
				}
			}
			AstNode::List(items) if items.is_empty() => out.push_str("[]"),
			AstNode::List(items) => {
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						out.push('\n');
						pad(out, level);
					}
					out.push_str("- ");
					item.write_node(out, level + 1);
				}
			}
		}
	}
}

/// Tag of a serialized `stmt` or `expr` node. The tag must be a string, since
/// `EmitExpr` nodes also carry an `expr` field holding an object.
fn node_tag(map: &serde_json::Map<String, serde_json::Value>) -> Option<String> {
	if !map.contains_key("node") {
		return None;
	}
	["stmt", "expr"].iter().find_map(|key| map.get(*key).and_then(serde_json::Value::as_str).map(str::to_owned))
}

fn is_spanned(map: &serde_json::Map<String, serde_json::Value>) -> bool {
	map.len() == 2 && map.contains_key("node") && map.contains_key("span")
}

fn pad(out: &mut String, level: usize) {
	for _ in 0..level {
		out.push_str("  ");
	}
}

fn write_field(out: &mut String, name: &str, child: &AstNode, level: usize) {
	out.push_str(name);
	out.push(':');
	match child {
		AstNode::Leaf(_) | AstNode::Node { .. } => {
			out.push(' ');
			child.write_node(out, level);
		}
		AstNode::List(items) if items.is_empty() => out.push_str(" []"),
		AstNode::Record(fields) if fields.is_empty() => out.push_str(" {}"),
		_ => {
			out.push('\n');
			pad(out, level + 1);
			child.write_node(out, level + 1);
		}
	}
}

/// Tagged nodes serialize as objects with a leading `type` entry.
impl Serialize for AstNode {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			AstNode::Node { tag, fields } => {
				let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
				map.serialize_entry("type", tag)?;
				for (name, child) in fields {
					map.serialize_entry(name, child)?;
				}
				map.end()
			}
			AstNode::Record(fields) => {
				let mut map = serializer.serialize_map(Some(fields.len()))?;
				for (name, child) in fields {
					map.serialize_entry(name, child)?;
				}
				map.end()
			}
			AstNode::List(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			AstNode::Leaf(value) => value.serialize(serializer),
		}
	}
}
