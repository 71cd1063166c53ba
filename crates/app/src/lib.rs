#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Playground state and output derivation.
//!
//! # Main Types
//!
//! - [`Playground`] - Owns the editor state, pane layout and settings; re-derives output on every edit
//! - [`EditorState`] - Template text, context text, render mode and view mode
//! - [`Dispatcher`] - Runs the engine pipeline selected by the view mode
//! - [`PlaygroundConfig`] - Initial contents, layout defaults and editor widget options
//!
//! # Architecture
//!
//! ```text
//! Playground
//! ├── state: EditorState           // template, context, render mode, view mode
//! ├── dispatcher: Dispatcher<E>    // view mode ──► engine call ──► Output
//! ├── layout: PaneLayout           // divider drags ──► pane sizes
//! ├── settings: SettingsStore<S>   // persisted pane sizes
//! └── output: Output               // derived, never edited directly
//! ```
//!
//! Everything runs synchronously on the caller's thread.

pub mod config;
mod defaults;
mod dispatcher;
mod mode;
pub mod output;
mod playground;
mod state;


pub use config::{ConfigError, EditorOptions, PlaygroundConfig};
pub use defaults::{DEFAULT_CONTEXT, DEFAULT_TEMPLATE};
pub use dispatcher::Dispatcher;
pub use mode::{RenderMode, ViewMode};
pub use output::{Output, OutputError, OutputErrorKind, OutputPane, OutputView, PaneStyle};
pub use playground::Playground;
pub use state::EditorState;
