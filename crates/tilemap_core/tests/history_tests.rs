//! HistoryStack：容量、撤销/重做对称性、过期记录。

use tilemap_core::{GridStore, HistoryStack, MAX_TILE_TRACKING};

#[test]
fn empty_stack_undo_and_redo_return_none() {
    let grid = GridStore::new(3, 3);
    let mut history = HistoryStack::default();
    assert!(history.undo(&grid).is_none());
    assert!(history.redo(&grid).is_none());
}

#[test]
fn overflow_evicts_oldest_records() {
    let mut history = HistoryStack::default();
    let extra = 37;
    for i in 0..(MAX_TILE_TRACKING + extra) {
        history.record_undo(i as i32, 0, i as i32);
    }

    assert_eq!(history.undo_len(), MAX_TILE_TRACKING);
    let oldest = history.undo_records().next().unwrap();
    assert_eq!(oldest.x, extra as i32);
    let newest = history.undo_records().last().unwrap();
    assert_eq!(newest.x, (MAX_TILE_TRACKING + extra - 1) as i32);
}

#[test]
fn custom_capacity_is_respected() {
    let mut history = HistoryStack::with_capacity(3);
    for i in 0..10 {
        history.record_undo(i, 0, -1);
    }
    assert_eq!(history.capacity(), 3);
    assert_eq!(history.undo_len(), 3);
}

#[test]
fn undo_moves_current_value_to_redo() {
    let mut grid = GridStore::new(4, 4);
    let mut history = HistoryStack::default();

    history.record_undo(1, 2, -1);
    grid.set(1, 2, 5).unwrap();

    let record = history.undo(&grid).unwrap();
    assert_eq!((record.x, record.y, record.tile), (1, 2, -1));
    assert_eq!(history.redo_len(), 1);
    grid.set(record.x, record.y, record.tile).unwrap();

    let record = history.redo(&grid).unwrap();
    assert_eq!((record.x, record.y, record.tile), (1, 2, 5));
    assert_eq!(history.undo_len(), 1);
    assert_eq!(history.redo_len(), 0);
}

#[test]
fn clear_redo_drops_only_redo_records() {
    let grid = GridStore::new(4, 4);
    let mut history = HistoryStack::default();
    history.record_undo(0, 0, -1);
    history.record_undo(1, 0, -1);
    history.undo(&grid).unwrap();

    history.clear_redo();
    assert_eq!(history.undo_len(), 1);
    assert!(!history.can_redo());
}

#[test]
fn stale_records_are_dropped_not_applied() {
    let mut grid = GridStore::new(10, 10);
    let mut history = HistoryStack::default();
    history.record_undo(1, 1, -1);
    history.record_undo(8, 8, -1);

    grid.resize(5, 5);

    let record = history.undo(&grid).unwrap();
    assert_eq!((record.x, record.y), (1, 1));
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 1);
}

#[test]
fn only_stale_records_behaves_like_empty() {
    let mut grid = GridStore::new(10, 10);
    let mut history = HistoryStack::default();
    history.record_undo(9, 9, 2);
    grid.resize(3, 3);

    assert!(history.undo(&grid).is_none());
    assert!(!history.can_undo());
}
