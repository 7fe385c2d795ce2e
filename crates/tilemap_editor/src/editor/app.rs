//! 编辑器应用装配（Bevy App 构建与系统注册）。

use bevy::prelude::*;
use bevy::ui::UiSystems;

use tilemap_core::{GridStore, HistoryStack, ViewportTransform};

use super::{
    paths::workspace_assets_dir,
    persistence::load_settings,
    preset,
    types::{
        CurrentMap, FrameInput, GridOverlay, MapNameInput, MapRevision, Notices, PendingAction,
        PresetState, TileImages,
    },
    ui, world, UI_BG,
};

/// 首帧同步窗口尺寸之前使用的画布尺寸。
const INITIAL_CANVAS: (f32, f32) = (1200.0, 800.0);

/// 运行编辑器。
pub fn run() {
    let assets_dir = workspace_assets_dir();
    let settings = load_settings();

    let grid = GridStore::new(settings.rows, settings.columns);
    let history = HistoryStack::with_capacity(settings.history_capacity);
    let viewport = ViewportTransform::new(
        settings.cell_width,
        settings.cell_height,
        INITIAL_CANVAS.0,
        INITIAL_CANVAS.1,
    )
    .with_zoom_limits(settings.zoom)
    .with_scroll_settings(settings.scroll);
    let current = CurrentMap {
        name: settings.default_map_name.clone(),
    };
    let title = settings.window_title.clone();

    App::new()
        .insert_resource(ClearColor(UI_BG))
        .add_plugins(
            DefaultPlugins
                .set(AssetPlugin {
                    // 用绝对路径避免 cwd 差异导致找不到资源
                    file_path: assets_dir.to_string_lossy().to_string(),
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        ..default()
                    }),
                    ..default()
                }),
        )
        // --- Resources ---
        .insert_resource(settings)
        .insert_resource(grid)
        .insert_resource(history)
        .insert_resource(viewport)
        .insert_resource(current)
        .init_resource::<MapRevision>()
        .init_resource::<Notices>()
        .init_resource::<GridOverlay>()
        .init_resource::<FrameInput>()
        .init_resource::<MapNameInput>()
        .init_resource::<PendingAction>()
        .init_resource::<PresetState>()
        .init_resource::<TileImages>()
        .add_systems(
            Startup,
            (
                // --- Startup ---
                world::setup_world,
                ui::setup_ui,
                preset::load_presets_startup,
            ),
        )
        .add_systems(
            Update,
            (
                // --- World: 输入 → 编辑 ---
                world::sync_canvas_size,
                world::collect_frame_input,
                world::apply_frame_input,
                world::editor_shortcuts,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                // --- UI: 按钮 ---
                ui::button_hover_styles,
                ui::palette_tile_click,
                ui::preset_cycle_click,
                ui::map_cycle_click,
                ui::map_name_field_click,
                ui::map_name_text_input,
                ui::quick_button_click,
                ui::action_button_click,
                ui::confirm_button_click,
                ui::preference_button_click,
                ui::policy_toggle_click,
            )
                .chain()
                // 输入框状态要在采集键盘之前确定
                .before(world::collect_frame_input),
        )
        .add_systems(
            Update,
            (
                // --- UI: 文本 ---
                ui::update_status_text,
                ui::update_notices_text,
                ui::update_panel_labels,
                ui::update_confirm_row,
                ui::update_minimap,
            )
                .after(world::editor_shortcuts),
        )
        .add_systems(Update, world::draw_canvas_helpers.after(world::editor_shortcuts))
        .add_systems(
            PostUpdate,
            (
                // --- 重建：调色板按钮（布局前）与地图 sprite ---
                ui::build_palette_when_changed.before(UiSystems::Layout),
                world::sync_tile_sprites,
            ),
        )
        .run();
}
