use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// How the template is interpreted when rendered.
///
/// Only selects the registered file name, and with it the engine's
/// auto-escaping. Parsing is unaffected.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
	#[default]
	Html,
	Text,
	Json,
}

impl RenderMode {
	pub fn extension(self) -> &'static str {
		match self {
			RenderMode::Html => "html",
			RenderMode::Text => "txt",
			RenderMode::Json => "json",
		}
	}

	/// Name the template is registered under, e.g. `template.html`.
	pub fn template_name(self) -> String {
		format!("template.{}", self.extension())
	}
}

/// Which derived view the output pane shows.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
	/// Rendered template output.
	#[default]
	Render,
	/// Lexical tokens with spans.
	Tokens,
	/// Parsed syntax tree.
	Ast,
	/// Compiled instructions per block.
	Instructions,
}

impl ViewMode {
	/// Returns `true` if the view reads the template context.
	pub fn uses_context(self) -> bool {
		matches!(self, ViewMode::Render)
	}
}
