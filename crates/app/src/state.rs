use crate::{PlaygroundConfig, RenderMode, ViewMode};

/// Everything the user edits or selects.
///
/// Output is derived from this and never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
	template: String,
	context: String,
	render_mode: RenderMode,
	view_mode: ViewMode,
}

impl EditorState {
	pub fn new(template: impl Into<String>, context: impl Into<String>) -> Self {
		Self {
			template: template.into(),
			context: context.into(),
			..Self::default()
		}
	}

	pub fn from_config(config: &PlaygroundConfig) -> Self {
		Self {
			template: config.template.clone(),
			context: config.context.clone(),
			render_mode: config.render_mode,
			view_mode: config.view_mode,
		}
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	pub fn context(&self) -> &str {
		&self.context
	}

	pub fn render_mode(&self) -> RenderMode {
		self.render_mode
	}

	pub fn view_mode(&self) -> ViewMode {
		self.view_mode
	}

	pub fn set_template(&mut self, template: impl Into<String>) {
		self.template = template.into();
	}

	pub fn set_context(&mut self, context: impl Into<String>) {
		self.context = context.into();
	}

	pub fn set_render_mode(&mut self, mode: RenderMode) {
		self.render_mode = mode;
	}

	pub fn set_view_mode(&mut self, mode: ViewMode) {
		self.view_mode = mode;
	}
}
