#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Resizable split-pane layout.
//!
//! The playground has two dividers: one between the template editor and the
//! context editor (dragged horizontally, sets the context pane width) and one
//! above the output pane (dragged vertically, sets the output pane height).
//! Each divider is driven by a [`PaneResizer`]; [`PaneLayout`] owns both and
//! routes pointer events to them.
//!
//! ```text
//! pointer down ──► DragSession { mouse_base, size_base }
//! pointer move ──► size = size_base - (coord - mouse_base) ──► SettingsStore
//! pointer up   ──► session released
//! ```
//!
//! Sizes change only while a session is open.

mod divider;
mod drag;
mod pane_layout;
mod resizer;

#[cfg(test)]
mod tests;

pub use divider::{Axis, Divider, PointerPosition};
pub use drag::{DragSession, SizeLimits};
pub use pane_layout::{LayoutDefaults, LayoutMetrics, PaneLayout};
pub use resizer::PaneResizer;
