//! Engine adapter traits.

use std::collections::BTreeMap;

use crate::{AstNode, BlockInstructions, EngineError, Span, Token, Value};

/// Named template sources registered together into one environment.
pub type TemplateFiles = BTreeMap<String, String>;

/// A template engine as seen by the playground.
///
/// All operations are synchronous and independent: calling one never affects
/// the outcome of another.
pub trait TemplateEngine {
	/// Environment produced by [`TemplateEngine::create_environment`].
	type Environment: RenderEnvironment;

	/// Registers every file of `files` into a fresh environment.
	///
	/// Fails if any source is rejected when it is added.
	fn create_environment(&self, files: &TemplateFiles) -> Result<Self::Environment, EngineError>;

	/// Lexes `source` into tokens paired with their source spans.
	fn tokenize(&self, source: &str) -> Result<Vec<(Token, Span)>, EngineError>;

	/// Parses `source` into its syntax tree.
	fn parse(&self, source: &str) -> Result<AstNode, EngineError>;

	/// Compiles `source` and returns the program of every block, keyed by block name.
	///
	/// The top-level program is stored under [`crate::ROOT_BLOCK`].
	fn instructions(&self, source: &str) -> Result<BlockInstructions, EngineError>;
}

/// A collection of registered templates.
pub trait RenderEnvironment {
	/// Renders the template registered as `name` against `context`.
	fn render(&self, name: &str, context: &Value) -> Result<String, EngineError>;
}
