//! “◀ 名称 ▶” 选择器：切换 preset、切换当前地图名。

use bevy::prelude::*;

use crate::editor::persistence::saved_map_names;
use crate::editor::preset::cycle_preset;
use crate::editor::types::{
    CurrentMap, EditorSettings, MapCycleButton, Notices, PresetCycleButton, PresetState,
    TileImages,
};

fn pressed_step<'a>(iter: impl Iterator<Item = (&'a Interaction, i32)>) -> Option<i32> {
    iter.filter(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, step)| step)
        .last()
}

pub fn preset_cycle_click(
    button_q: Query<(&Interaction, &PresetCycleButton), Changed<Interaction>>,
    asset_server: Res<AssetServer>,
    settings: Res<EditorSettings>,
    mut presets: ResMut<PresetState>,
    mut images: ResMut<TileImages>,
    mut notices: ResMut<Notices>,
) {
    let Some(step) = pressed_step(button_q.iter().map(|(i, b)| (i, b.0))) else {
        return;
    };
    cycle_preset(
        step,
        &asset_server,
        &settings,
        &mut presets,
        &mut images,
        &mut notices,
    );
}

/// 在已保存的地图名之间循环（当前名字即使还没保存过也参与循环）。
pub fn map_cycle_click(
    button_q: Query<(&Interaction, &MapCycleButton), Changed<Interaction>>,
    settings: Res<EditorSettings>,
    mut current: ResMut<CurrentMap>,
) {
    let Some(step) = pressed_step(button_q.iter().map(|(i, b)| (i, b.0))) else {
        return;
    };

    let mut names = saved_map_names(&settings);
    if !names.contains(&current.name) {
        names.push(current.name.clone());
        names.sort();
    }
    let Some(position) = names.iter().position(|n| *n == current.name) else {
        return;
    };
    let next = (position as i64 + step as i64).rem_euclid(names.len() as i64) as usize;
    if names[next] != current.name {
        current.name = names[next].clone();
    }
}
