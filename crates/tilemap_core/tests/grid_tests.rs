//! GridStore：读写、边界、resize、crop、wipe。

use tilemap_core::{CoreError, GridStore, ResizePolicy, EMPTY_TILE};

fn grid_with(rows: u32, columns: u32, tiles: &[(i32, i32, i32)]) -> GridStore {
    let mut grid = GridStore::new(rows, columns);
    for &(x, y, t) in tiles {
        grid.set(x, y, t).unwrap();
    }
    grid
}

// ============================================================================
// get / set
// ============================================================================

#[test]
fn new_grid_is_empty() {
    let grid = GridStore::new(4, 6);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.columns(), 6);
    assert_eq!(grid.cells().len(), 24);
    assert!(grid.is_empty());
    assert_eq!(grid.get(5, 3).unwrap(), EMPTY_TILE);
}

#[test]
fn set_then_get_every_cell() {
    let mut grid = GridStore::new(7, 9);
    for y in 0..7 {
        for x in 0..9 {
            let v = y * 9 + x;
            grid.set(x, y, v).unwrap();
            assert_eq!(grid.get(x, y).unwrap(), v);
        }
    }
    // 行优先
    assert_eq!(grid.cells()[9 * 2 + 3], 2 * 9 + 3);
}

#[test]
fn out_of_range_access_fails_and_leaves_grid_unchanged() {
    let mut grid = grid_with(5, 5, &[(1, 1, 3)]);
    let before = grid.clone();

    for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (100, 100), (i32::MIN, 2)] {
        assert!(matches!(grid.get(x, y), Err(CoreError::OutOfRange { .. })));
        assert!(matches!(grid.set(x, y, 9), Err(CoreError::OutOfRange { .. })));
    }
    assert_eq!(grid, before);
}

#[test]
fn from_cells_rejects_length_mismatch() {
    assert!(GridStore::from_cells(2, 3, vec![EMPTY_TILE; 6]).is_ok());
    assert!(matches!(
        GridStore::from_cells(2, 3, vec![EMPTY_TILE; 5]),
        Err(CoreError::CorruptData { .. })
    ));
}

#[test]
fn occupied_lists_non_empty_cells() {
    let grid = grid_with(3, 4, &[(3, 0, 1), (0, 2, 7)]);
    let cells: Vec<_> = grid.occupied().collect();
    assert_eq!(cells, vec![(3, 0, 1), (0, 2, 7)]);
}

// ============================================================================
// resize
// ============================================================================

#[test]
fn grow_keeps_content_and_fills_with_empty() {
    let mut grid = grid_with(3, 3, &[(2, 2, 5), (0, 1, 4)]);
    let report = grid.resize(6, 8);

    assert_eq!((grid.rows(), grid.columns()), (6, 8));
    assert_eq!(report.discarded, 0);
    assert_eq!(grid.get(2, 2).unwrap(), 5);
    assert_eq!(grid.get(0, 1).unwrap(), 4);
    assert_eq!(grid.get(7, 5).unwrap(), EMPTY_TILE);
}

#[test]
fn shrinking_truncates_tiles_outside_new_bounds() {
    let mut grid = grid_with(10, 10, &[(8, 8, 2), (1, 1, 6)]);
    let report = grid.resize(5, 5);

    assert!(report.is_destructive());
    assert_eq!(report.discarded, 1);
    assert_eq!(grid.get(1, 1).unwrap(), 6);
    assert!(matches!(grid.get(8, 8), Err(CoreError::OutOfRange { .. })));
}

#[test]
fn reject_policy_keeps_grid_when_tiles_would_be_lost() {
    let mut grid = grid_with(10, 10, &[(8, 8, 2)]);
    let err = grid
        .resize_with_policy(5, 5, ResizePolicy::RejectIfOccupied)
        .unwrap_err();
    assert!(matches!(err, CoreError::TilesOutsideBounds { count: 1, .. }));
    assert_eq!((grid.rows(), grid.columns()), (10, 10));
    assert_eq!(grid.get(8, 8).unwrap(), 2);

    // 丢不了数据时照常缩小
    let report = grid
        .resize_with_policy(9, 9, ResizePolicy::RejectIfOccupied)
        .unwrap();
    assert_eq!((report.rows, report.columns), (9, 9));
}

#[test]
fn count_outside_counts_only_occupied_cells() {
    let grid = grid_with(10, 10, &[(9, 0, 1), (0, 9, 1), (9, 9, 1), (2, 2, 1)]);
    assert_eq!(grid.count_outside(5, 5), 3);
    assert_eq!(grid.count_outside(10, 5), 2);
    assert_eq!(grid.count_outside(10, 10), 0);
}

// ============================================================================
// crop / wipe
// ============================================================================

#[test]
fn crop_shrinks_to_content_with_minimum() {
    let mut grid = grid_with(20, 20, &[(12, 3, 1)]);
    assert_eq!(grid.occupied_extent(), (4, 13));

    let dims = grid.crop(10, 10);
    assert_eq!(dims, (10, 13));
    assert_eq!((grid.rows(), grid.columns()), (10, 13));
    assert_eq!(grid.get(12, 3).unwrap(), 1);
}

#[test]
fn crop_of_empty_grid_uses_minimum_size() {
    let mut grid = GridStore::new(40, 30);
    assert_eq!(grid.crop(10, 10), (10, 10));
}

#[test]
fn crop_never_grows_a_small_grid() {
    let mut grid = GridStore::new(5, 5);
    assert_eq!(grid.crop(10, 10), (5, 5));
}

#[test]
fn crop_is_idempotent() {
    let mut grid = grid_with(50, 60, &[(44, 2, 1), (3, 31, 2), (0, 0, 3)]);
    let first = grid.crop(10, 10);
    let after_first = grid.clone();
    let second = grid.crop(10, 10);

    assert_eq!(first, (32, 45));
    assert_eq!(first, second);
    assert_eq!(grid, after_first);
}

#[test]
fn wipe_clears_cells_but_keeps_dimensions() {
    let mut grid = grid_with(6, 4, &[(1, 1, 3), (3, 5, 8)]);
    grid.wipe();
    assert!(grid.is_empty());
    assert_eq!((grid.rows(), grid.columns()), (6, 4));
}
