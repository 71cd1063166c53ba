/// Failure reported across the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
	/// The engine rejected the template or failed while evaluating it.
	///
	/// Holds the engine's own diagnostic, including source context when the
	/// engine runs in debug mode.
	#[error("{0}")]
	Template(String),
	/// Engine output did not have the shape the adapter expects.
	#[error("unexpected engine output: {0}")]
	Conversion(String),
}

impl From<minijinja::Error> for EngineError {
	fn from(err: minijinja::Error) -> Self {
		Self::Template(format!("{err:#}"))
	}
}

impl From<serde_json::Error> for EngineError {
	fn from(err: serde_json::Error) -> Self {
		Self::Conversion(err.to_string())
	}
}
