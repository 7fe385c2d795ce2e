//! EditController：放置/删除、撤销/重做、偏好设置、逐帧输入。

use tilemap_core::{
    CoreError, EditController, EditorKey, GridLimits, GridStore, HeldKeys, HistoryStack,
    InputSnapshot, Preference, ResizePolicy, ViewportTransform, EMPTY_TILE,
};

/// 编辑器的三份状态（控制器只借用它们）。
struct Session {
    grid: GridStore,
    history: HistoryStack,
    viewport: ViewportTransform,
}

impl Session {
    fn new(rows: u32, columns: u32) -> Self {
        Self {
            grid: GridStore::new(rows, columns),
            history: HistoryStack::default(),
            viewport: ViewportTransform::new(32, 32, 1200.0, 800.0),
        }
    }

    fn controller(&mut self) -> EditController<'_> {
        EditController::new(&mut self.grid, &mut self.history, &mut self.viewport)
    }
}

fn loose_limits() -> GridLimits {
    GridLimits {
        rows: 1..=500,
        columns: 1..=500,
        cell_size: 10..=70,
    }
}

/// 格子 (x, y) 中心的屏幕坐标（视口在原点、缩放 1.0、格子 32px）。
fn center(x: i32, y: i32) -> (f32, f32) {
    (x as f32 * 32.0 + 16.0, y as f32 * 32.0 + 16.0)
}

// ============================================================================
// place / remove
// ============================================================================

#[test]
fn place_remove_undo_redo_scenario() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    let (px, py) = center(2, 2);

    assert!(c.try_place(px, py, 3));
    assert_eq!(c.get(2, 2).unwrap(), 3);

    assert!(c.try_remove(px, py));
    assert_eq!(c.get(2, 2).unwrap(), EMPTY_TILE);

    c.undo().unwrap();
    assert_eq!(c.get(2, 2).unwrap(), 3);

    c.undo().unwrap();
    assert_eq!(c.get(2, 2).unwrap(), EMPTY_TILE);

    c.redo().unwrap();
    assert_eq!(c.get(2, 2).unwrap(), 3);
}

#[test]
fn identical_writes_are_not_recorded() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    let (px, py) = center(4, 1);

    assert!(c.try_place(px, py, 7));
    assert!(!c.try_place(px, py, 7));
    assert_eq!(c.history().undo_len(), 1);

    assert!(!c.try_remove(center(5, 5).0, center(5, 5).1));
    assert_eq!(c.history().undo_len(), 1);
}

#[test]
fn pointer_outside_canvas_or_grid_is_rejected() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();

    // 右侧面板
    assert!(!c.try_place(1250.0, 10.0, 1));
    // 画布内但在地图外
    assert!(!c.try_place(400.0, 400.0, 1));
    assert!(!c.try_remove(400.0, 400.0));
    assert_eq!(c.history().undo_len(), 0);
    assert!(c.grid().is_empty());
}

#[test]
fn placement_respects_scroll_and_scale() {
    let mut s = Session::new(50, 50);
    s.viewport.set_scale(1.4);
    s.viewport.set_scroll(-64.0, -32.0);
    let (px, py) = s.viewport.grid_to_screen(7, 9);
    let (cw, ch) = s.viewport.scaled_cell_size();

    let mut c = s.controller();
    assert!(c.try_place(px + cw * 0.5, py + ch * 0.5, 2));
    assert_eq!(c.get(7, 9).unwrap(), 2);
}

#[test]
fn placing_empty_tile_acts_as_remove() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    assert!(c.place_cell(1, 1, 4));
    assert!(c.place_cell(1, 1, EMPTY_TILE));
    assert_eq!(c.get(1, 1).unwrap(), EMPTY_TILE);
    assert!(!c.place_cell(1, 1, EMPTY_TILE));
}

// ============================================================================
// undo / redo
// ============================================================================

#[test]
fn empty_history_is_reported_but_harmless() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    assert!(matches!(c.undo(), Err(CoreError::HistoryEmpty(_))));
    assert!(matches!(c.redo(), Err(CoreError::HistoryEmpty(_))));
    assert!(c.grid().is_empty());
}

#[test]
fn undo_all_then_redo_all_restores_final_state() {
    let mut s = Session::new(12, 12);
    let mut c = s.controller();

    let ops: &[(i32, i32, i32)] = &[
        (0, 0, 1),
        (3, 4, 2),
        (0, 0, 5),
        (11, 11, 3),
        (3, 4, EMPTY_TILE),
        (6, 2, 9),
        (0, 0, EMPTY_TILE),
        (6, 2, 4),
    ];
    let mut applied = 0;
    for &(x, y, t) in ops {
        if c.place_cell(x, y, t) {
            applied += 1;
        }
    }
    assert_eq!(applied, ops.len());
    let final_cells = c.grid().cells().to_vec();

    for _ in 0..applied {
        c.undo().unwrap();
    }
    assert!(c.grid().is_empty());

    for _ in 0..applied {
        c.redo().unwrap();
    }
    assert_eq!(c.grid().cells(), final_cells.as_slice());
}

#[test]
fn fresh_edit_after_undo_clears_redo() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();

    c.place_cell(1, 1, 2);
    c.undo().unwrap();
    assert!(c.history().can_redo());

    c.place_cell(5, 5, 8);
    assert!(matches!(c.redo(), Err(CoreError::HistoryEmpty(_))));
    assert_eq!(c.get(1, 1).unwrap(), EMPTY_TILE);
}

#[test]
fn redo_after_undo_restores_the_edit() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    c.place_cell(1, 1, 2);
    c.undo().unwrap();
    let record = c.redo().unwrap();
    assert_eq!((record.x, record.y, record.tile), (1, 1, 2));
    assert_eq!(c.get(1, 1).unwrap(), 2);
}

#[test]
fn history_referencing_removed_cells_is_dropped() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller().with_limits(loose_limits());

    c.place_cell(8, 8, 6);
    let change = c.set_rows(5).unwrap();
    assert_eq!(change.discarded, 1);
    c.set_columns(5).unwrap();
    assert!(matches!(c.get(8, 8), Err(CoreError::OutOfRange { .. })));

    assert!(matches!(c.undo(), Err(CoreError::HistoryEmpty(_))));
}

// ============================================================================
// preferences
// ============================================================================

#[test]
fn preferences_are_validated_against_limits() {
    let mut s = Session::new(100, 100);
    let mut c = s.controller();

    let err = c.set_rows(5).unwrap_err();
    assert!(matches!(
        err,
        CoreError::PreferenceOutOfBounds {
            name: "rows",
            min: 10,
            max: 500,
            ..
        }
    ));
    assert_eq!(c.grid().rows(), 100);

    assert!(c.set_cell_size(80, 32).is_err());
    assert_eq!(c.viewport().cell_size(), (32, 32));
}

#[test]
fn apply_preference_reports_change() {
    let mut s = Session::new(100, 100);
    let mut c = s.controller();

    let change = c.apply_preference(Preference::Columns, 120).unwrap();
    assert_eq!((change.old, change.new), (100, 120));
    assert_eq!(c.grid().columns(), 120);
    assert_eq!(
        change.to_string(),
        "Setting 'columns' changed from '100' to '120'"
    );

    c.apply_preference(Preference::CellHeight, 48).unwrap();
    assert_eq!(c.viewport().cell_size(), (32, 48));
    assert_eq!(c.preference_value(Preference::CellHeight), 48);
}

#[test]
fn reject_policy_refuses_destructive_shrink() {
    let mut s = Session::new(20, 20);
    let mut c = s
        .controller()
        .with_limits(loose_limits())
        .with_resize_policy(ResizePolicy::RejectIfOccupied);

    c.place_cell(15, 15, 1);
    assert!(matches!(
        c.set_rows(10),
        Err(CoreError::TilesOutsideBounds { count: 1, .. })
    ));
    assert_eq!(c.grid().rows(), 20);
    assert_eq!(c.get(15, 15).unwrap(), 1);
}

// ============================================================================
// map lifecycle
// ============================================================================

#[test]
fn crop_uses_configured_minimum() {
    let mut s = Session::new(40, 40);
    let mut c = s.controller();
    c.place_cell(14, 2, 1);
    assert_eq!(c.crop(), (10, 15));
    assert_eq!(c.crop(), (10, 15));
}

#[test]
fn wipe_keeps_history_usable() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    c.place_cell(3, 3, 2);
    c.wipe();
    assert!(c.grid().is_empty());
    c.undo().unwrap();
    assert_eq!(c.get(3, 3).unwrap(), EMPTY_TILE);
}

#[test]
fn new_map_resets_everything() {
    let mut s = Session::new(10, 10);
    s.viewport.set_scroll(40.0, 40.0);
    let mut c = s.controller();
    c.place_cell(1, 1, 1);
    c.new_map(30, 20, 16, 16);

    assert_eq!((c.grid().rows(), c.grid().columns()), (30, 20));
    assert!(c.grid().is_empty());
    assert!(!c.history().can_undo());
    assert_eq!(c.viewport().scroll(), (0.0, 0.0));
    assert_eq!(c.viewport().cell_size(), (16, 16));
}

#[test]
fn replace_map_clears_history_and_resets_view() {
    let mut s = Session::new(10, 10);
    s.viewport.set_scale(1.6);
    let mut c = s.controller();
    c.place_cell(0, 0, 1);

    let mut loaded = GridStore::new(12, 14);
    loaded.set(13, 11, 4).unwrap();
    c.replace_map(loaded.clone(), 24, 24);

    assert_eq!(c.grid(), &loaded);
    assert!(!c.history().can_undo());
    assert_eq!(c.viewport().scale(), 1.0);
    assert_eq!(c.viewport().cell_size(), (24, 24));
}

// ============================================================================
// frame processing
// ============================================================================

#[test]
fn frame_places_then_undo_event_reverts() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    let (px, py) = center(2, 3);

    let mut input = InputSnapshot::pointer_at(px, py);
    input.primary_down = true;
    let report = c.process_frame(&input, Some(4));
    assert!(report.grid_changed);
    assert!(!report.viewport_changed);
    assert_eq!(c.get(2, 3).unwrap(), 4);

    let undo = InputSnapshot {
        events: vec![EditorKey::Undo],
        ..InputSnapshot::default()
    };
    assert!(c.process_frame(&undo, Some(4)).grid_changed);
    assert_eq!(c.get(2, 3).unwrap(), EMPTY_TILE);

    // 栈已空：不报错，也没有变化
    assert!(!c.process_frame(&undo, Some(4)).any());
}

#[test]
fn frame_secondary_button_removes() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    c.place_cell(1, 1, 9);
    let (px, py) = center(1, 1);

    let mut input = InputSnapshot::pointer_at(px, py);
    input.secondary_down = true;
    assert!(c.process_frame(&input, Some(9)).grid_changed);
    assert_eq!(c.get(1, 1).unwrap(), EMPTY_TILE);
}

#[test]
fn frame_without_selection_does_not_place() {
    let mut s = Session::new(10, 10);
    let mut c = s.controller();
    let mut input = InputSnapshot::pointer_at(16.0, 16.0);
    input.primary_down = true;
    assert!(!c.process_frame(&input, None).grid_changed);
}

#[test]
fn held_keys_scroll_with_base_and_fast_speed() {
    let mut s = Session::new(100, 100);
    let mut c = s.controller();

    let mut input = InputSnapshot {
        held: HeldKeys {
            right: true,
            ..HeldKeys::default()
        },
        ..InputSnapshot::default()
    };
    assert!(c.process_frame(&input, None).viewport_changed);
    assert_eq!(c.viewport().scroll(), (-5.0, 0.0));

    input.held.fast = true;
    input.held.down = true;
    c.process_frame(&input, None);
    assert_eq!(c.viewport().scroll(), (-20.0, -15.0));
}

#[test]
fn zoom_events_change_viewport() {
    let mut s = Session::new(100, 100);
    let mut c = s.controller();
    let input = InputSnapshot {
        events: vec![EditorKey::ZoomIn, EditorKey::ZoomIn],
        ..InputSnapshot::default()
    };
    assert!(c.process_frame(&input, None).viewport_changed);
    assert!((c.viewport().scale() - 1.4).abs() < 1e-6);
}
