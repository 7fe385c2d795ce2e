use bevy::prelude::*;

use crate::editor::types::{CurrentMap, EditSession, GridOverlay, MapNameInput};

use super::map_io::save_map;

/// 编辑器快捷键：Ctrl+S 保存当前地图，G 切换网格线。
pub fn editor_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    current: Res<CurrentMap>,
    name_input: Res<MapNameInput>,
    mut overlay: ResMut<GridOverlay>,
    mut session: EditSession,
) {
    if name_input.is_editing() {
        return;
    }

    let ctrl = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);

    if ctrl && keys.just_pressed(KeyCode::KeyS) {
        save_map(&mut session, &current.name);
    }

    if !ctrl && keys.just_pressed(KeyCode::KeyG) {
        overlay.visible = !overlay.visible;
    }
}
