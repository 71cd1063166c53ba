//! Playground configuration.
//!
//! Every field is optional in JSON; omitted fields take their defaults.
//!
//! ```json
//! {
//!   "namespace": "my-playground",
//!   "renderMode": "text",
//!   "layout": { "contextPaneWidth": 400 },
//!   "editor": { "tabSize": 4, "keyboardHandler": "vim" }
//! }
//! ```

use playground_layout::LayoutDefaults;
use playground_settings::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_CONTEXT, DEFAULT_TEMPLATE, RenderMode, ViewMode};

/// Errors raised while loading a [`PlaygroundConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid playground config: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("invalid playground config: {field} must be greater than zero")]
	Zero { field: &'static str },
	#[error("invalid playground config: namespace must not be empty")]
	EmptyNamespace,
	#[error("invalid playground config: expected a JSON object")]
	NotObject,
}

/// Initial state and options for a playground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaygroundConfig {
	/// Prefix for persisted setting keys.
	pub namespace: String,
	pub template: String,
	/// Context as JSON text.
	pub context: String,
	pub render_mode: RenderMode,
	pub view_mode: ViewMode,
	pub layout: LayoutDefaults,
	pub editor: EditorOptions,
}

impl Default for PlaygroundConfig {
	fn default() -> Self {
		Self {
			namespace: DEFAULT_NAMESPACE.to_owned(),
			template: DEFAULT_TEMPLATE.to_owned(),
			context: DEFAULT_CONTEXT.to_owned(),
			render_mode: RenderMode::default(),
			view_mode: ViewMode::default(),
			layout: LayoutDefaults::default(),
			editor: EditorOptions::default(),
		}
	}
}

impl PlaygroundConfig {
	/// Parses and validates a JSON configuration.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let value: serde_json::Value = serde_json::from_str(text)?;
		// Field defaults would otherwise let `[]` through as an empty sequence.
		if !value.is_object() {
			return Err(ConfigError::NotObject);
		}
		let config: Self = serde_json::from_value(value)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.namespace.is_empty() {
			return Err(ConfigError::EmptyNamespace);
		}
		if self.editor.font_size == 0 {
			return Err(ConfigError::Zero { field: "editor.fontSize" });
		}
		if self.editor.tab_size == 0 {
			return Err(ConfigError::Zero { field: "editor.tabSize" });
		}
		Ok(())
	}
}

/// Options handed to the code editor widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
	pub font_size: u32,
	pub tab_size: u32,
	/// Key binding scheme such as `vim` or `emacs`. `None` keeps the widget default.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub keyboard_handler: Option<String>,
}

impl Default for EditorOptions {
	fn default() -> Self {
		Self {
			font_size: 13,
			tab_size: 2,
			keyboard_handler: None,
		}
	}
}
