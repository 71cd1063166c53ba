//! Divider identity and pointer geometry.

use strum::{Display, EnumString, IntoStaticStr};

/// Direction a divider is dragged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
	/// Dragged left/right; reads the pointer's x coordinate.
	Horizontal,
	/// Dragged up/down; reads the pointer's y coordinate.
	Vertical,
}

impl Axis {
	/// Projects a pointer position onto this axis.
	pub fn coordinate(self, pos: PointerPosition) -> i32 {
		match self {
			Axis::Horizontal => pos.x,
			Axis::Vertical => pos.y,
		}
	}
}

/// Pointer position in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
	pub x: i32,
	pub y: i32,
}

impl PointerPosition {
	pub fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// A resizable boundary of the playground layout.
///
/// Both panes are anchored to the far edge of the window, so dragging toward
/// that edge shrinks the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Divider {
	/// Between the template editor and the context editor.
	Context,
	/// Between the editors and the output pane.
	Output,
}

impl Divider {
	pub const ALL: [Divider; 2] = [Divider::Context, Divider::Output];

	pub fn axis(self) -> Axis {
		match self {
			Divider::Context => Axis::Horizontal,
			Divider::Output => Axis::Vertical,
		}
	}

	/// Name of the setting the pane size is persisted under.
	pub fn setting_key(self) -> &'static str {
		match self {
			Divider::Context => "contextPaneWidth",
			Divider::Output => "outputPaneHeight",
		}
	}
}
