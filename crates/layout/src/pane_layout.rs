use playground_settings::{SettingsStore, Storage};
use serde::{Deserialize, Serialize};

use crate::{Divider, PaneResizer, PointerPosition, SizeLimits};

/// Initial pane geometry, used when nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutDefaults {
	pub context_pane_width: u32,
	pub output_pane_height: u32,
	/// Smallest size a drag can shrink either pane to.
	pub min_pane_size: u32,
}

impl Default for LayoutDefaults {
	fn default() -> Self {
		Self {
			context_pane_width: 350,
			output_pane_height: 300,
			min_pane_size: 0,
		}
	}
}

impl LayoutDefaults {
	pub fn size_for(&self, divider: Divider) -> u32 {
		match divider {
			Divider::Context => self.context_pane_width,
			Divider::Output => self.output_pane_height,
		}
	}

	pub fn limits(&self) -> SizeLimits {
		SizeLimits::new(self.min_pane_size, None)
	}
}

/// Current pane sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
	pub context_width: u32,
	pub output_height: u32,
}

/// Both dividers of the playground.
///
/// At most one divider drags at a time: pressing one releases the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLayout {
	context: PaneResizer,
	output: PaneResizer,
}

impl PaneLayout {
	pub fn new(context: PaneResizer, output: PaneResizer) -> Self {
		Self { context, output }
	}

	/// Seeds both panes from persisted settings, reading each key once.
	pub fn load<S: Storage>(defaults: &LayoutDefaults, settings: &SettingsStore<S>) -> Self {
		let resizer = |divider: Divider| PaneResizer::load(divider, defaults.size_for(divider), defaults.limits(), settings);
		Self::new(resizer(Divider::Context), resizer(Divider::Output))
	}

	pub fn resizer(&self, divider: Divider) -> &PaneResizer {
		match divider {
			Divider::Context => &self.context,
			Divider::Output => &self.output,
		}
	}

	fn resizer_mut(&mut self, divider: Divider) -> &mut PaneResizer {
		match divider {
			Divider::Context => &mut self.context,
			Divider::Output => &mut self.output,
		}
	}

	/// Returns the divider being dragged, if any.
	pub fn dragging(&self) -> Option<Divider> {
		Divider::ALL.into_iter().find(|d| self.resizer(*d).is_dragging())
	}

	/// Starts dragging `divider` from `pos`.
	pub fn pointer_down(&mut self, divider: Divider, pos: PointerPosition) {
		for other in Divider::ALL.into_iter().filter(|d| *d != divider) {
			self.resizer_mut(other).pointer_up();
		}
		self.resizer_mut(divider).pointer_down(divider.axis().coordinate(pos));
	}

	/// Routes a pointer move to the dragging divider.
	///
	/// Returns the divider and its new size if a pane was resized.
	pub fn pointer_move<S: Storage>(&mut self, pos: PointerPosition, settings: &mut SettingsStore<S>) -> Option<(Divider, u32)> {
		let divider = self.dragging()?;
		let coordinate = divider.axis().coordinate(pos);
		self.resizer_mut(divider).pointer_move(coordinate, settings).map(|size| (divider, size))
	}

	/// Ends any drag in progress.
	pub fn pointer_up(&mut self) {
		self.context.pointer_up();
		self.output.pointer_up();
	}

	pub fn metrics(&self) -> LayoutMetrics {
		LayoutMetrics {
			context_width: self.context.size(),
			output_height: self.output.size(),
		}
	}
}
