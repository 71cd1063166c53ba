use playground_engine::TemplateEngine;
use playground_layout::{Divider, LayoutMetrics, PaneLayout, PointerPosition};
use playground_settings::{SettingsStore, Storage};
use tracing::{debug, info};

use crate::output::{Output, OutputPane};
use crate::{Dispatcher, EditorOptions, EditorState, PlaygroundConfig, RenderMode, ViewMode};

/// A running playground.
///
/// Every setter re-derives the output from the full editor state, so the
/// output always matches the current inputs.
pub struct Playground<E, S> {
	state: EditorState,
	dispatcher: Dispatcher<E>,
	layout: PaneLayout,
	settings: SettingsStore<S>,
	editor: EditorOptions,
	output: Output,
}

impl<E: TemplateEngine, S: Storage> Playground<E, S> {
	/// Builds a playground, restoring pane sizes from `storage`.
	pub fn new(engine: E, storage: S, config: PlaygroundConfig) -> Self {
		let settings = SettingsStore::with_namespace(storage, config.namespace.clone());
		let layout = PaneLayout::load(&config.layout, &settings);
		let state = EditorState::from_config(&config);
		let dispatcher = Dispatcher::new(engine);
		let output = dispatcher.dispatch(&state);
		info!(namespace = %settings.namespace(), metrics = ?layout.metrics(), "Playground ready");
		Self {
			state,
			dispatcher,
			layout,
			settings,
			editor: config.editor,
			output,
		}
	}

	pub fn state(&self) -> &EditorState {
		&self.state
	}

	pub fn output(&self) -> &Output {
		&self.output
	}

	/// Current contents of the output pane.
	pub fn pane(&self) -> OutputPane {
		OutputPane::from_output(&self.output)
	}

	pub fn set_template(&mut self, template: impl Into<String>) {
		self.state.set_template(template);
		self.refresh();
	}

	pub fn set_context(&mut self, context: impl Into<String>) {
		self.state.set_context(context);
		self.refresh();
	}

	pub fn set_render_mode(&mut self, mode: RenderMode) {
		debug!(%mode, "Render mode changed");
		self.state.set_render_mode(mode);
		self.refresh();
	}

	pub fn set_view_mode(&mut self, mode: ViewMode) {
		debug!(%mode, "View mode changed");
		self.state.set_view_mode(mode);
		self.refresh();
	}

	pub fn pointer_down(&mut self, divider: Divider, pos: PointerPosition) {
		self.layout.pointer_down(divider, pos);
	}

	/// Returns the resized divider and its new size, if any.
	pub fn pointer_move(&mut self, pos: PointerPosition) -> Option<(Divider, u32)> {
		self.layout.pointer_move(pos, &mut self.settings)
	}

	pub fn pointer_up(&mut self) {
		self.layout.pointer_up();
	}

	pub fn layout(&self) -> LayoutMetrics {
		self.layout.metrics()
	}

	pub fn dragging(&self) -> Option<Divider> {
		self.layout.dragging()
	}

	pub fn editor_options(&self) -> &EditorOptions {
		&self.editor
	}

	pub fn settings(&self) -> &SettingsStore<S> {
		&self.settings
	}

	/// Consumes the playground, returning its storage backend.
	pub fn into_storage(self) -> S {
		self.settings.into_storage()
	}

	fn refresh(&mut self) {
		self.output = self.dispatcher.dispatch(&self.state);
	}
}
