//! 右侧面板按钮：快捷按钮（撤销/重做/网格/缩放）与地图操作（新建/保存/读取/导入/导出/清空/裁剪）。

use bevy::prelude::*;

use crate::editor::types::{
    ActionButton, ActionKind, ConfirmButton, ConfirmLabel, ConfirmRow, CurrentMap, EditSession,
    GridOverlay, PaletteTileButton, PendingAction, QuickButton, QuickKind,
};
use crate::editor::world::{
    crop_map, export_map, import_map, load_map, new_map, save_map, wipe_map,
};
use crate::editor::{UI_BUTTON, UI_BUTTON_HOVER, UI_BUTTON_PRESS};

/// 普通按钮的 hover/press 配色（调色板按钮自己管理高亮）。
pub fn button_hover_styles(
    mut button_q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, Without<PaletteTileButton>),
    >,
) {
    for (interaction, mut bg) in button_q.iter_mut() {
        *bg = BackgroundColor(match *interaction {
            Interaction::Pressed => UI_BUTTON_PRESS,
            Interaction::Hovered => UI_BUTTON_HOVER,
            Interaction::None => UI_BUTTON,
        });
    }
}

pub fn quick_button_click(
    button_q: Query<(&Interaction, &QuickButton), Changed<Interaction>>,
    mut overlay: ResMut<GridOverlay>,
    mut session: EditSession,
) {
    for (interaction, button) in button_q.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button.0 {
            QuickKind::Undo => match session.controller().undo() {
                Ok(_) => session.revision.bump_grid(),
                Err(err) => debug!("{err}"),
            },
            QuickKind::Redo => match session.controller().redo() {
                Ok(_) => session.revision.bump_grid(),
                Err(err) => debug!("{err}"),
            },
            QuickKind::ToggleGrid => overlay.visible = !overlay.visible,
            QuickKind::ZoomIn => {
                if session.controller().zoom_in() {
                    session.revision.bump_view();
                }
            }
            QuickKind::ZoomOut => {
                if session.controller().zoom_out() {
                    session.revision.bump_view();
                }
            }
        }
    }
}

fn run_action(kind: ActionKind, session: &mut EditSession, current: &CurrentMap) {
    match kind {
        ActionKind::NewMap => new_map(session),
        ActionKind::SaveMap => save_map(session, &current.name),
        ActionKind::LoadMap => load_map(session, &current.name),
        ActionKind::ExportMap => export_map(session, &current.name),
        ActionKind::ImportMap => import_map(session),
        ActionKind::Wipe => wipe_map(session),
        ActionKind::Crop => crop_map(session),
    }
}

/// 地图操作按钮点击处理；新建/清空/裁剪先挂起等待确认。
pub fn action_button_click(
    action_q: Query<(&Interaction, &ActionButton), Changed<Interaction>>,
    current: Res<CurrentMap>,
    mut pending: ResMut<PendingAction>,
    mut session: EditSession,
) {
    let requested = action_q
        .iter()
        .filter(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, action)| action.0)
        .last();
    let Some(requested) = requested else {
        return;
    };

    if let Some(kind) = pending.request(requested) {
        run_action(kind, &mut session, &current);
    }
}

pub fn confirm_button_click(
    confirm_q: Query<(&Interaction, &ConfirmButton), Changed<Interaction>>,
    current: Res<CurrentMap>,
    mut pending: ResMut<PendingAction>,
    mut session: EditSession,
) {
    let answer = confirm_q
        .iter()
        .filter(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, button)| button.0)
        .last();
    match answer {
        Some(true) => {
            if let Some(kind) = pending.confirm() {
                run_action(kind, &mut session, &current);
            }
        }
        Some(false) => pending.cancel(),
        None => {}
    }
}

/// 有待确认的操作时显示确认行。
pub fn update_confirm_row(
    pending: Res<PendingAction>,
    mut row_q: Query<&mut Node, With<ConfirmRow>>,
    mut label_q: Query<&mut Text, With<ConfirmLabel>>,
) {
    if !pending.is_changed() {
        return;
    }
    let prompt = pending.get().and_then(ActionKind::confirmation_prompt);
    if let Ok(mut node) = row_q.single_mut() {
        node.display = if prompt.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }
    if let Ok(mut text) = label_q.single_mut() {
        text.0 = prompt.unwrap_or_default().to_string();
    }
}
