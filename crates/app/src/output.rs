//! Derived output and its presentation.
//!
//! An [`Output`] is computed from the editor state and never edited. The
//! output pane shows it through [`OutputPane::from_output`], which picks the
//! text and whether it is styled as an error.

use std::fmt::Write as _;

use playground_engine::{AstNode, EngineError, Instruction, Span, Token};
use serde::Serialize;

/// Result of applying the selected view to the editor state.
pub type Output = Result<OutputView, OutputError>;

/// Successful output of one view.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputView {
	/// Rendered template text.
	Rendered(String),
	/// Tokens in source order.
	Tokens(Vec<(Token, Span)>),
	/// Syntax tree of the template.
	Ast(AstNode),
	/// Instructions per block, ordered by block name.
	Instructions(Vec<(String, Vec<Instruction>)>),
}

impl OutputView {
	/// Formats the view as the output pane displays it.
	pub fn to_text(&self) -> String {
		match self {
			OutputView::Rendered(text) => text.clone(),
			OutputView::Tokens(tokens) => token_rows(tokens),
			OutputView::Ast(node) => node.pretty(),
			OutputView::Instructions(blocks) => instruction_tables(blocks),
		}
	}
}

/// Where a failure originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputErrorKind {
	/// The context text is not valid JSON.
	Context,
	/// The engine rejected the template.
	Engine,
}

/// A failed view. Carried as data and shown in the output pane.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct OutputError {
	pub kind: OutputErrorKind,
	pub message: String,
}

impl OutputError {
	pub fn new(kind: OutputErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub(crate) fn context(err: &serde_json::Error) -> Self {
		Self::new(OutputErrorKind::Context, format!("invalid context JSON: {err}"))
	}
}

impl From<EngineError> for OutputError {
	fn from(err: EngineError) -> Self {
		Self::new(OutputErrorKind::Engine, err.to_string())
	}
}

/// Visual treatment of the output pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaneStyle {
	#[default]
	Normal,
	EngineError,
	ContextError,
}

/// What the output pane displays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutputPane {
	pub style: PaneStyle,
	pub text: String,
}

impl OutputPane {
	pub fn from_output(output: &Output) -> Self {
		match output {
			Ok(view) => Self {
				style: PaneStyle::Normal,
				text: view.to_text(),
			},
			Err(err) => Self {
				style: match err.kind {
					OutputErrorKind::Context => PaneStyle::ContextError,
					OutputErrorKind::Engine => PaneStyle::EngineError,
				},
				text: err.message.clone(),
			},
		}
	}

	pub fn is_error(&self) -> bool {
		self.style != PaneStyle::Normal
	}
}

/// One row per token: span, kind, then the payload if the kind carries one.
fn token_rows(tokens: &[(Token, Span)]) -> String {
	let mut out = String::new();
	for (token, span) in tokens {
		let mut row = format!("{:<13} {:<16}", span.to_string(), token.name);
		if let Some(payload) = &token.payload {
			let _ = write!(row, " {payload}");
		}
		out.push_str(row.trim_end());
		out.push('\n');
	}
	out
}

/// One table per block, separated by a blank line.
fn instruction_tables(blocks: &[(String, Vec<Instruction>)]) -> String {
	let mut out = String::new();
	for (idx, (name, instructions)) in blocks.iter().enumerate() {
		if idx > 0 {
			out.push('\n');
		}
		let _ = writeln!(out, "{name}:");
		for (pc, instr) in instructions.iter().enumerate() {
			let mut row = format!("{pc:>5}  {:<20}", instr.op);
			if let Some(arg) = &instr.arg {
				let _ = write!(row, " {arg}");
			}
			out.push_str(row.trim_end());
			out.push('\n');
		}
	}
	out
}
