use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use tilemap_core::{GridStore, ViewportTransform};

use crate::editor::types::GridOverlay;

/// 画布像素 → 世界坐标（y 翻转）。
fn world(p: (f32, f32)) -> Vec2 {
    Vec2::new(p.0, -p.1)
}

fn cell_outline(gizmos: &mut Gizmos, top_left: Vec2, bottom_right: Vec2, color: Color) {
    let top_right = Vec2::new(bottom_right.x, top_left.y);
    let bottom_left = Vec2::new(top_left.x, bottom_right.y);
    gizmos.line_2d(top_left, top_right, color);
    gizmos.line_2d(top_right, bottom_right, color);
    gizmos.line_2d(bottom_right, bottom_left, color);
    gizmos.line_2d(bottom_left, top_left, color);
}

/// 在画布上绘制辅助线（可见范围内的网格 + 地图边界 + hover 高亮）。
pub fn draw_canvas_helpers(
    mut gizmos: Gizmos,
    windows: Query<&Window, With<PrimaryWindow>>,
    overlay: Res<GridOverlay>,
    grid: Res<GridStore>,
    viewport: Res<ViewportTransform>,
) {
    let (columns, rows) = (grid.columns(), grid.rows());
    let range = viewport.visible_range(columns, rows);
    if range.is_empty() {
        return;
    }

    let grid_color = Color::srgba(1.0, 1.0, 1.0, 0.12);
    let border_color = Color::srgba(1.0, 1.0, 1.0, 0.30);

    if overlay.visible {
        let top = viewport.grid_to_screen(0, range.start_row as i32).1;
        let bottom = viewport.grid_to_screen(0, range.stop_row as i32).1;
        for x in range.start_col..=range.stop_col {
            let px = viewport.grid_to_screen(x as i32, 0).0;
            gizmos.line_2d(world((px, top)), world((px, bottom)), grid_color);
        }
        let left = viewport.grid_to_screen(range.start_col as i32, 0).0;
        let right = viewport.grid_to_screen(range.stop_col as i32, 0).0;
        for y in range.start_row..=range.stop_row {
            let py = viewport.grid_to_screen(0, y as i32).1;
            gizmos.line_2d(world((left, py)), world((right, py)), grid_color);
        }
    }

    // 地图边界
    cell_outline(
        &mut gizmos,
        world(viewport.grid_to_screen(0, 0)),
        world(viewport.grid_to_screen(columns as i32, rows as i32)),
        border_color,
    );

    // hover 格子高亮（仅在鼠标在画布内时）
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if !viewport.in_canvas(cursor.x, cursor.y) {
        return;
    }
    let (x, y) = viewport.screen_to_grid(cursor.x, cursor.y);
    if !grid.contains(x, y) {
        return;
    }
    cell_outline(
        &mut gizmos,
        world(viewport.grid_to_screen(x, y)),
        world(viewport.grid_to_screen(x + 1, y + 1)),
        Color::srgba(0.25, 0.45, 0.95, 0.85),
    );
}
