//! Drag sessions and size limits.

/// State captured when a divider drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
	/// Pointer coordinate, on the divider's axis, at pointer-down.
	pub mouse_base: i32,
	/// Pane size at pointer-down.
	pub size_base: u32,
}

impl DragSession {
	pub fn new(mouse_base: i32, size_base: u32) -> Self {
		Self { mouse_base, size_base }
	}

	/// Returns the unclamped pane size for a pointer at `coordinate`.
	pub fn size_at(&self, coordinate: i32) -> i64 {
		i64::from(self.size_base) - (i64::from(coordinate) - i64::from(self.mouse_base))
	}
}

/// Bounds a pane size is kept within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeLimits {
	pub min: u32,
	pub max: Option<u32>,
}

impl SizeLimits {
	pub fn new(min: u32, max: Option<u32>) -> Self {
		Self { min, max }
	}

	/// Clamps `size` into `[min, max]`.
	///
	/// A `max` below `min` is treated as `min`.
	pub fn clamp(&self, size: i64) -> u32 {
		let max = self.max.map_or(i64::from(u32::MAX), |max| i64::from(max.max(self.min)));
		u32::try_from(size.clamp(i64::from(self.min), max)).unwrap_or(self.min)
	}
}
