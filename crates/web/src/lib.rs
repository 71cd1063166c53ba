#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Browser bindings for the template playground.
//!
//! Exports a `Playground` class to JavaScript. The host page owns the editor
//! widgets and the DOM; it forwards edits and pointer events here and draws
//! whatever [`bindings::Playground::output`] and [`bindings::Playground::layout`]
//! return. Pane sizes persist in `window.localStorage`.

pub mod bindings;
mod names;
mod storage;


pub use names::NameError;
pub use storage::LocalStorage;

use wasm_bindgen::prelude::*;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
	tracing::debug!("Playground module loaded");
}
