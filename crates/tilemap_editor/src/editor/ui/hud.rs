//! 底部状态行、提示信息，以及右侧面板上的各个标签。

use bevy::prelude::*;

use tilemap_core::{GridStore, HistoryStack, Preference, ResizePolicy, ViewportTransform};

use crate::editor::types::{
    CurrentMap, EditorSettings, MapNameInput, MapNameLabel, Notices, NoticesText, PolicyLabel,
    PreferenceLabel, PresetLabel, PresetState, StatusText,
};

/// 只在内容变化时写入，避免每帧触发文本重排。
fn set_text(text: &mut Mut<Text>, value: String) {
    if text.0 != value {
        text.0 = value;
    }
}

/// 更新底部状态行（选中 tile、地图尺寸、缩放、滚动、历史）。
pub fn update_status_text(
    presets: Res<PresetState>,
    current: Res<CurrentMap>,
    grid: Res<GridStore>,
    history: Res<HistoryStack>,
    viewport: Res<ViewportTransform>,
    mut status_q: Query<&mut Text, With<StatusText>>,
) {
    let Ok(mut text) = status_q.single_mut() else {
        return;
    };

    let tile = match presets.palette.tiles().get(presets.palette.selected_position()) {
        Some(tile) => format!("{} (#{})", tile.label, tile.index),
        None => "none".to_string(),
    };
    let (cell_w, cell_h) = viewport.cell_size();
    let (scroll_x, scroll_y) = viewport.scroll();
    let msg = format!(
        "Tile: {tile} | Map '{}': {}x{} cells of {}x{} px | Zoom {:.1}x | Scroll ({:.0}, {:.0}) | Undo {} / Redo {}\n\
         WASD scroll (Shift fast)  Z undo  X redo  =/- or wheel zoom  G grid  Ctrl+S save  click map name to rename",
        current.name,
        grid.columns(),
        grid.rows(),
        cell_w,
        cell_h,
        viewport.scale(),
        scroll_x,
        scroll_y,
        history.undo_len(),
        history.redo_len(),
    );
    set_text(&mut text, msg);
}

pub fn update_notices_text(
    notices: Res<Notices>,
    mut notices_q: Query<&mut Text, With<NoticesText>>,
) {
    if !notices.is_changed() {
        return;
    }
    let Ok(mut text) = notices_q.single_mut() else {
        return;
    };
    set_text(&mut text, notices.lines().collect::<Vec<_>>().join("\n"));
}

/// 右侧面板标签：当前 preset、地图名、偏好设置数值、缩小策略。
pub fn update_panel_labels(
    presets: Res<PresetState>,
    current: Res<CurrentMap>,
    name_input: Res<MapNameInput>,
    settings: Res<EditorSettings>,
    grid: Res<GridStore>,
    viewport: Res<ViewportTransform>,
    mut preset_q: Query<
        &mut Text,
        (
            With<PresetLabel>,
            Without<MapNameLabel>,
            Without<PreferenceLabel>,
            Without<PolicyLabel>,
        ),
    >,
    mut map_q: Query<
        &mut Text,
        (
            With<MapNameLabel>,
            Without<PresetLabel>,
            Without<PreferenceLabel>,
            Without<PolicyLabel>,
        ),
    >,
    mut pref_q: Query<
        (&mut Text, &PreferenceLabel),
        (Without<PresetLabel>, Without<MapNameLabel>, Without<PolicyLabel>),
    >,
    mut policy_q: Query<
        &mut Text,
        (
            With<PolicyLabel>,
            Without<PresetLabel>,
            Without<MapNameLabel>,
            Without<PreferenceLabel>,
        ),
    >,
) {
    if let Ok(mut text) = preset_q.single_mut() {
        let value = match presets.active_name() {
            Some(name) => format!("{name} ({}/{})", presets.active + 1, presets.names.len()),
            None => "no presets".to_string(),
        };
        set_text(&mut text, value);
    }

    if let Ok(mut text) = map_q.single_mut() {
        set_text(&mut text, name_input.display(&current.name));
    }

    let (cell_w, cell_h) = viewport.cell_size();
    for (mut text, label) in pref_q.iter_mut() {
        let value = match label.0 {
            Preference::Rows => grid.rows(),
            Preference::Columns => grid.columns(),
            Preference::CellWidth => cell_w,
            Preference::CellHeight => cell_h,
        };
        let range = settings.limits.range(label.0);
        set_text(
            &mut text,
            format!("{}: {value} ({}..{})", label.0, range.start(), range.end()),
        );
    }

    if let Ok(mut text) = policy_q.single_mut() {
        let value = match settings.resize_policy {
            ResizePolicy::Truncate => "shrink: truncate",
            ResizePolicy::RejectIfOccupied => "shrink: reject if occupied",
        };
        set_text(&mut text, value.to_string());
    }
}
