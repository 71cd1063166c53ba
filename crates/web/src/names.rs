use std::str::FromStr;

use playground_app::{RenderMode, ViewMode};
use playground_layout::Divider;

/// A mode or divider name the host passed that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{name}', expected one of: {expected}")]
pub struct NameError {
	pub kind: &'static str,
	pub name: String,
	pub expected: &'static str,
}

fn parse<T: FromStr>(kind: &'static str, expected: &'static str, name: &str) -> Result<T, NameError> {
	T::from_str(name).map_err(|_| NameError {
		kind,
		name: name.to_owned(),
		expected,
	})
}

pub(crate) fn render_mode(name: &str) -> Result<RenderMode, NameError> {
	parse("render mode", "html, text, json", name)
}

pub(crate) fn view_mode(name: &str) -> Result<ViewMode, NameError> {
	parse("view mode", "render, tokens, ast, instructions", name)
}

pub(crate) fn divider(name: &str) -> Result<Divider, NameError> {
	parse("divider", "context, output", name)
}
