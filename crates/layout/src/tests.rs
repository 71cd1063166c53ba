use std::str::FromStr;

use playground_settings::{MemoryStorage, SettingsStore};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn store() -> SettingsStore<MemoryStorage> {
	SettingsStore::new(MemoryStorage::new())
}

#[test]
fn drag_toward_anchor_edge_grows_pane_away_from_it() {
	let mut settings = store();
	let mut resizer = PaneResizer::new(Divider::Context, 350, SizeLimits::default());
	resizer.pointer_down(400);
	assert_eq!(resizer.session(), Some(&DragSession::new(400, 350)));
	assert_eq!(resizer.pointer_move(380, &mut settings), Some(370));
	assert_eq!(resizer.pointer_move(450, &mut settings), Some(300));
	assert_eq!(resizer.size(), 300);
}

#[test]
fn every_move_is_written_through() {
	let mut settings = store();
	let mut resizer = PaneResizer::new(Divider::Output, 300, SizeLimits::default());
	resizer.pointer_down(100);
	resizer.pointer_move(90, &mut settings);
	assert_eq!(settings.get("outputPaneHeight", 0u32), 310);
	resizer.pointer_move(120, &mut settings);
	assert_eq!(settings.storage().raw("minijinja-playground:outputPaneHeight"), Some("280"));
}

#[test]
fn move_without_session_changes_nothing() {
	let mut settings = store();
	let mut resizer = PaneResizer::new(Divider::Context, 350, SizeLimits::default());
	assert_eq!(resizer.pointer_move(10, &mut settings), None);
	assert_eq!(resizer.size(), 350);
	assert!(settings.storage().is_empty());
}

#[test]
fn pointer_up_releases_session() {
	let mut settings = store();
	let mut resizer = PaneResizer::new(Divider::Context, 350, SizeLimits::default());
	resizer.pointer_down(400);
	assert!(resizer.pointer_up());
	assert!(!resizer.is_dragging());
	assert_eq!(resizer.session(), None);
	assert_eq!(resizer.pointer_move(300, &mut settings), None);
	assert!(!resizer.pointer_up());
}

#[test]
fn size_is_clamped_to_limits() {
	let mut settings = store();
	let mut resizer = PaneResizer::new(Divider::Context, 100, SizeLimits::new(20, Some(200)));
	resizer.pointer_down(0);
	assert_eq!(resizer.pointer_move(1000, &mut settings), Some(20));
	assert_eq!(resizer.pointer_move(-1000, &mut settings), Some(200));
	assert_eq!(resizer.pointer_move(-2000, &mut settings), None);
}

#[test]
fn default_limits_never_invert_the_pane() {
	let mut settings = store();
	let mut resizer = PaneResizer::new(Divider::Context, 50, SizeLimits::default());
	resizer.pointer_down(0);
	assert_eq!(resizer.pointer_move(500, &mut settings), Some(0));
}

#[test]
fn failed_write_keeps_in_memory_size() {
	let mut settings = SettingsStore::new(MemoryStorage::with_quota(0));
	let mut resizer = PaneResizer::new(Divider::Context, 350, SizeLimits::default());
	resizer.pointer_down(400);
	assert_eq!(resizer.pointer_move(380, &mut settings), Some(370));
	assert_eq!(resizer.size(), 370);
	assert_eq!(settings.get("contextPaneWidth", 0u32), 0);
}

#[test]
fn load_prefers_persisted_size() {
	let mut settings = store();
	settings.set("contextPaneWidth", &512).unwrap();
	let resizer = PaneResizer::load(Divider::Context, 350, SizeLimits::default(), &settings);
	assert_eq!(resizer.divider(), Divider::Context);
	assert_eq!(resizer.size(), 512);
	assert!(!resizer.is_dragging());
}

#[test]
fn load_clamps_persisted_size() {
	let mut settings = store();
	settings.set("outputPaneHeight", &5).unwrap();
	let resizer = PaneResizer::load(Divider::Output, 300, SizeLimits::new(40, None), &settings);
	assert_eq!(resizer.size(), 40);
}

#[test]
fn load_ignores_malformed_size() {
	let mut settings = store();
	settings.set("outputPaneHeight", &-3).unwrap();
	let resizer = PaneResizer::load(Divider::Output, 300, SizeLimits::default(), &settings);
	assert_eq!(resizer.size(), 300);
}

#[test]
fn layout_routes_axes_per_divider() {
	let mut settings = store();
	let mut layout = PaneLayout::load(&LayoutDefaults::default(), &settings);
	assert_eq!(layout.metrics(), LayoutMetrics { context_width: 350, output_height: 300 });

	layout.pointer_down(Divider::Context, PointerPosition::new(400, 10));
	assert_eq!(layout.pointer_move(PointerPosition::new(380, 999), &mut settings), Some((Divider::Context, 370)));
	layout.pointer_up();

	layout.pointer_down(Divider::Output, PointerPosition::new(999, 500));
	assert_eq!(layout.pointer_move(PointerPosition::new(0, 450), &mut settings), Some((Divider::Output, 350)));
	layout.pointer_up();

	assert_eq!(layout.dragging(), None);
	assert_eq!(layout.metrics(), LayoutMetrics { context_width: 370, output_height: 350 });
}

#[test]
fn pressing_one_divider_releases_the_other() {
	let settings = store();
	let mut layout = PaneLayout::load(&LayoutDefaults::default(), &settings);
	layout.pointer_down(Divider::Context, PointerPosition::new(1, 1));
	layout.pointer_down(Divider::Output, PointerPosition::new(1, 1));
	assert_eq!(layout.dragging(), Some(Divider::Output));
	assert!(!layout.resizer(Divider::Context).is_dragging());
}

#[test]
fn sizes_survive_a_reload() {
	let mut settings = store();
	let mut layout = PaneLayout::load(&LayoutDefaults::default(), &settings);
	layout.pointer_down(Divider::Context, PointerPosition::new(400, 0));
	layout.pointer_move(PointerPosition::new(300, 0), &mut settings);
	layout.pointer_up();

	let reloaded = PaneLayout::load(&LayoutDefaults::default(), &settings);
	assert_eq!(reloaded.metrics().context_width, 450);
	assert_eq!(reloaded.metrics().output_height, 300);
}

#[test]
fn metrics_serialize_camel_case() {
	let metrics = LayoutMetrics { context_width: 1, output_height: 2 };
	assert_eq!(
		serde_json::to_value(metrics).unwrap(),
		serde_json::json!({"contextWidth": 1, "outputHeight": 2})
	);
}

#[rstest]
#[case("context", Divider::Context, Axis::Horizontal, "contextPaneWidth")]
#[case("output", Divider::Output, Axis::Vertical, "outputPaneHeight")]
fn divider_names(#[case] name: &str, #[case] divider: Divider, #[case] axis: Axis, #[case] key: &str) {
	assert_eq!(Divider::from_str(name).unwrap(), divider);
	assert_eq!(divider.to_string(), name);
	assert_eq!(divider.axis(), axis);
	assert_eq!(divider.setting_key(), key);
}

#[test]
fn unknown_divider_name_is_rejected() {
	assert!(Divider::from_str("sidebar").is_err());
}

proptest! {
	#[test]
	fn unclamped_size_follows_drag_formula(size_base in 0u32..10_000, mouse_base in -5_000i32..5_000, coord in -5_000i32..5_000) {
		let session = DragSession::new(mouse_base, size_base);
		let expected = i64::from(size_base) - (i64::from(coord) - i64::from(mouse_base));
		prop_assert_eq!(session.size_at(coord), expected);
		prop_assert_eq!(SizeLimits::default().clamp(expected), u32::try_from(expected.max(0)).unwrap());
	}
}
