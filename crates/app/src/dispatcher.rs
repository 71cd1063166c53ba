use playground_engine::{RenderEnvironment, TemplateEngine, TemplateFiles, Value};
use tracing::{debug, trace};

use crate::output::{Output, OutputError, OutputView};
use crate::{EditorState, RenderMode, ViewMode};

/// Runs the engine pipeline selected by the view mode.
///
/// Every call is independent. A failure in one view is returned as data and
/// never changes what another view produces.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<E> {
	engine: E,
}

impl<E: TemplateEngine> Dispatcher<E> {
	pub fn new(engine: E) -> Self {
		Self { engine }
	}

	pub fn engine(&self) -> &E {
		&self.engine
	}

	/// Derives the output for `state`.
	pub fn dispatch(&self, state: &EditorState) -> Output {
		let view = state.view_mode();
		debug!(%view, render_mode = %state.render_mode(), "Dispatching view");
		let output = match view {
			ViewMode::Render => self.render(state.template(), state.context(), state.render_mode()),
			ViewMode::Tokens => self.tokens(state.template()),
			ViewMode::Ast => self.ast(state.template()),
			ViewMode::Instructions => self.instructions(state.template()),
		};
		if let Err(err) = &output {
			debug!(%view, kind = ?err.kind, "View failed");
		}
		output
	}

	/// Renders `template` against the JSON `context`.
	///
	/// The context is parsed first; if it is invalid the engine is not called.
	pub fn render(&self, template: &str, context: &str, mode: RenderMode) -> Output {
		let context = parse_context(context)?;
		let name = mode.template_name();
		let files = TemplateFiles::from([(name.clone(), template.to_owned())]);
		let env = self.engine.create_environment(&files)?;
		let rendered = env.render(&name, &context)?;
		trace!(name = %name, len = rendered.len(), "Rendered template");
		Ok(OutputView::Rendered(rendered))
	}

	pub fn tokens(&self, template: &str) -> Output {
		Ok(OutputView::Tokens(self.engine.tokenize(template)?))
	}

	pub fn ast(&self, template: &str) -> Output {
		Ok(OutputView::Ast(self.engine.parse(template)?))
	}

	/// Compiles `template`, ordering blocks by name.
	pub fn instructions(&self, template: &str) -> Output {
		let mut blocks: Vec<_> = self.engine.instructions(template)?.into_iter().collect();
		blocks.sort_by(|a, b| a.0.cmp(&b.0));
		Ok(OutputView::Instructions(blocks))
	}
}

/// Parses context text into a template value.
pub(crate) fn parse_context(text: &str) -> Result<Value, OutputError> {
	Value::from_json_str(text).map_err(|err| OutputError::context(&err))
}
