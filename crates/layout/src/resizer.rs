//! Single-divider resize controller.

use playground_settings::{SettingsStore, Storage};
use tracing::{trace, warn};

use crate::{Divider, DragSession, SizeLimits};

/// Owns one pane size and turns pointer drags on its divider into new sizes.
///
/// Every size change is written through to the settings store under the
/// divider's setting key. A failed write is logged and dropped; the in-memory
/// size stays authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneResizer {
	divider: Divider,
	size: u32,
	limits: SizeLimits,
	session: Option<DragSession>,
}

impl PaneResizer {
	/// Creates a resizer at `size`, clamped into `limits`.
	pub fn new(divider: Divider, size: u32, limits: SizeLimits) -> Self {
		Self {
			divider,
			size: limits.clamp(i64::from(size)),
			limits,
			session: None,
		}
	}

	/// Creates a resizer seeded from the persisted size, or `default` if none is stored.
	pub fn load<S: Storage>(divider: Divider, default: u32, limits: SizeLimits, settings: &SettingsStore<S>) -> Self {
		let size = settings.get(divider.setting_key(), default);
		trace!(%divider, size, "Loaded pane size");
		Self::new(divider, size, limits)
	}

	pub fn divider(&self) -> Divider {
		self.divider
	}

	pub fn size(&self) -> u32 {
		self.size
	}

	pub fn limits(&self) -> SizeLimits {
		self.limits
	}

	/// Returns `true` while a drag session is open.
	pub fn is_dragging(&self) -> bool {
		self.session.is_some()
	}

	pub fn session(&self) -> Option<&DragSession> {
		self.session.as_ref()
	}

	/// Opens a drag session at `coordinate`, replacing any open session.
	pub fn pointer_down(&mut self, coordinate: i32) {
		let session = DragSession::new(coordinate, self.size);
		trace!(divider = %self.divider, mouse_base = coordinate, size_base = self.size, "Drag started");
		self.session = Some(session);
	}

	/// Resizes the pane for a pointer at `coordinate`.
	///
	/// Returns the new size if it changed. Does nothing without an open session.
	pub fn pointer_move<S: Storage>(&mut self, coordinate: i32, settings: &mut SettingsStore<S>) -> Option<u32> {
		let session = self.session?;
		let size = self.limits.clamp(session.size_at(coordinate));
		if size == self.size {
			return None;
		}
		self.size = size;
		trace!(divider = %self.divider, size, "Drag resized pane");
		if let Err(e) = settings.set(self.divider.setting_key(), &size) {
			warn!(divider = %self.divider, error = %e, "Failed to persist pane size");
		}
		Some(size)
	}

	/// Closes the drag session. Returns `true` if one was open.
	pub fn pointer_up(&mut self) -> bool {
		let ended = self.session.take().is_some();
		if ended {
			trace!(divider = %self.divider, size = self.size, "Drag ended");
		}
		ended
	}
}
