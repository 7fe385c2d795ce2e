use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use tilemap_core::{GridStore, ViewportTransform};

use crate::editor::types::{MapRevision, TileLayer, WorldCamera};
use crate::editor::{BOTTOM_PANEL_HEIGHT_PX, RIGHT_PANEL_WIDTH_PX};

/// 初始化世界相机：视口原点放在左上角，世界 `(x, -y)` 对应画布像素 `(x, y)`。
/// 同时生成地图 sprite 的父节点，滚动/缩放只改它的 `Transform`。
pub fn setup_world(mut commands: Commands) {
    commands.spawn((Transform::default(), Visibility::default(), TileLayer));

    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            viewport_origin: Vec2::new(0.0, 1.0),
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 0.0, 1000.0),
        WorldCamera,
    ));
}

/// 窗口尺寸变化时同步画布尺寸（窗口减去右侧面板和底部面板）。
pub fn sync_canvas_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    grid: Res<GridStore>,
    mut viewport: ResMut<ViewportTransform>,
    mut revision: ResMut<MapRevision>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let width = (window.width() - RIGHT_PANEL_WIDTH_PX).max(0.0);
    let height = (window.height() - BOTTOM_PANEL_HEIGHT_PX).max(0.0);
    if viewport.canvas_size() == (width, height) {
        return;
    }

    viewport.set_canvas_size(width, height);
    if viewport.scroll_settings().bounded {
        viewport.clamp_scroll(grid.columns(), grid.rows());
    }
    revision.bump_view();
}
