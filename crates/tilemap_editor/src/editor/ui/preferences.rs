//! 偏好设置：行数/列数/格子尺寸的 `-` / `+` 按钮，以及缩小地图时的处理策略。

use bevy::prelude::*;

use tilemap_core::ResizePolicy;

use crate::editor::persistence::save_settings;
use crate::editor::types::{
    EditSession, EditorSettings, Notices, PolicyToggleButton, PreferenceButton,
};

pub fn preference_button_click(
    button_q: Query<(&Interaction, &PreferenceButton), Changed<Interaction>>,
    mut session: EditSession,
) {
    for (interaction, button) in button_q.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let mut controller = session.controller();
        let current = controller.preference_value(button.preference) as i64;
        let value = (current + button.delta as i64).clamp(0, u32::MAX as i64) as u32;
        let result = controller.apply_preference(button.preference, value);
        match result {
            Ok(change) => {
                session.revision.bump_all();
                session.notice(change.to_string());
            }
            Err(err) => session.warn(err.to_string()),
        }
    }
}

/// 切换缩小策略（截断 / 有内容时拒绝），并写回配置文件。
pub fn policy_toggle_click(
    button_q: Query<&Interaction, (Changed<Interaction>, With<PolicyToggleButton>)>,
    mut settings: ResMut<EditorSettings>,
    mut notices: ResMut<Notices>,
) {
    if !button_q.iter().any(|i| *i == Interaction::Pressed) {
        return;
    }

    settings.resize_policy = match settings.resize_policy {
        ResizePolicy::Truncate => ResizePolicy::RejectIfOccupied,
        ResizePolicy::RejectIfOccupied => ResizePolicy::Truncate,
    };
    let line = format!("shrink policy: {:?}", settings.resize_policy);
    info!("{line}");
    notices.push(line);

    if let Err(err) = save_settings(&settings) {
        warn!("failed to save settings: {err}");
        notices.push(format!("failed to save settings: {err}"));
    }
}
