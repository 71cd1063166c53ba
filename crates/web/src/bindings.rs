//! The `Playground` class exported to JavaScript.

use playground_app::{PlaygroundConfig, RenderMode, ViewMode};
use playground_engine::MiniJinja;
use playground_layout::PointerPosition;
use wasm_bindgen::prelude::*;

use crate::{LocalStorage, names};

type Inner = playground_app::Playground<MiniJinja, LocalStorage>;

#[wasm_bindgen]
pub struct Playground {
	inner: Inner,
}

#[wasm_bindgen]
impl Playground {
	/// Creates a playground from an optional JSON config.
	#[wasm_bindgen(constructor)]
	pub fn new(config: Option<String>) -> Result<Playground, JsError> {
		let config = match config.as_deref() {
			Some(json) => PlaygroundConfig::from_json(json)?,
			None => PlaygroundConfig::default(),
		};
		Ok(Self {
			inner: Inner::new(MiniJinja, LocalStorage::new(), config),
		})
	}

	pub fn template(&self) -> String {
		self.inner.state().template().to_owned()
	}

	#[wasm_bindgen(js_name = setTemplate)]
	pub fn set_template(&mut self, template: String) {
		self.inner.set_template(template);
	}

	pub fn context(&self) -> String {
		self.inner.state().context().to_owned()
	}

	#[wasm_bindgen(js_name = setContext)]
	pub fn set_context(&mut self, context: String) {
		self.inner.set_context(context);
	}

	#[wasm_bindgen(js_name = renderMode)]
	pub fn render_mode(&self) -> String {
		self.inner.state().render_mode().to_string()
	}

	#[wasm_bindgen(js_name = setRenderMode)]
	pub fn set_render_mode(&mut self, mode: &str) -> Result<(), JsError> {
		let mode: RenderMode = names::render_mode(mode)?;
		self.inner.set_render_mode(mode);
		Ok(())
	}

	#[wasm_bindgen(js_name = viewMode)]
	pub fn view_mode(&self) -> String {
		self.inner.state().view_mode().to_string()
	}

	#[wasm_bindgen(js_name = setViewMode)]
	pub fn set_view_mode(&mut self, mode: &str) -> Result<(), JsError> {
		let mode: ViewMode = names::view_mode(mode)?;
		self.inner.set_view_mode(mode);
		Ok(())
	}

	/// Returns `{ style, text }` for the output pane.
	pub fn output(&self) -> Result<JsValue, JsError> {
		Ok(serde_wasm_bindgen::to_value(&self.inner.pane())?)
	}

	#[wasm_bindgen(js_name = pointerDown)]
	pub fn pointer_down(&mut self, divider: &str, x: i32, y: i32) -> Result<(), JsError> {
		let divider = names::divider(divider)?;
		self.inner.pointer_down(divider, PointerPosition::new(x, y));
		Ok(())
	}

	/// Returns `true` if a pane was resized.
	#[wasm_bindgen(js_name = pointerMove)]
	pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
		self.inner.pointer_move(PointerPosition::new(x, y)).is_some()
	}

	#[wasm_bindgen(js_name = pointerUp)]
	pub fn pointer_up(&mut self) {
		self.inner.pointer_up();
	}

	/// Name of the divider being dragged, if any.
	pub fn dragging(&self) -> Option<String> {
		self.inner.dragging().map(|divider| divider.to_string())
	}

	/// Returns `{ contextWidth, outputHeight }` in pixels.
	pub fn layout(&self) -> Result<JsValue, JsError> {
		Ok(serde_wasm_bindgen::to_value(&self.inner.layout())?)
	}

	/// Returns `{ fontSize, tabSize, keyboardHandler? }` for the editor widgets.
	#[wasm_bindgen(js_name = editorOptions)]
	pub fn editor_options(&self) -> Result<JsValue, JsError> {
		Ok(serde_wasm_bindgen::to_value(self.inner.editor_options())?)
	}
}
