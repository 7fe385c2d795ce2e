use bevy::ecs::message::MessageReader;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use tilemap_core::{EditorKey, HeldKeys, InputSnapshot, ViewportTransform};

use crate::editor::types::{FrameInput, MapNameInput};

/// 采集本帧输入：
/// - W/A/S/D 滚动，Shift 加速
/// - Z 撤销，X 重做
/// - `=` / `-` 或画布内滚轮缩放
/// - 左键放置，右键删除
///
/// 输入地图名时键盘只给输入框用，这里只保留鼠标。
pub fn collect_frame_input(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut wheel: MessageReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    viewport: Res<ViewportTransform>,
    name_input: Res<MapNameInput>,
    mut frame: ResMut<FrameInput>,
) {
    let pointer = windows
        .single()
        .ok()
        .and_then(|w| w.cursor_position())
        .map(|p| (p.x, p.y));

    let ctrl = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
    let typing = name_input.is_editing();

    let mut events = Vec::new();
    if !ctrl && !typing {
        if keys.just_pressed(KeyCode::KeyZ) {
            events.push(EditorKey::Undo);
        }
        if keys.just_pressed(KeyCode::KeyX) {
            events.push(EditorKey::Redo);
        }
    }
    if !typing {
        if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
            events.push(EditorKey::ZoomIn);
        }
        if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
            events.push(EditorKey::ZoomOut);
        }
    }

    // 滚轮事件必须每帧读完；只有指针在画布内才缩放
    let delta: f32 = wheel.read().map(|ev| ev.y).sum();
    let over_canvas = pointer.is_some_and(|(x, y)| viewport.in_canvas(x, y));
    if over_canvas && delta > 0.0 {
        events.push(EditorKey::ZoomIn);
    } else if over_canvas && delta < 0.0 {
        events.push(EditorKey::ZoomOut);
    }

    // Ctrl 组合键留给快捷键（Ctrl+S 保存），不触发滚动
    let held = if ctrl || typing {
        HeldKeys::default()
    } else {
        HeldKeys {
            left: keys.pressed(KeyCode::KeyA),
            right: keys.pressed(KeyCode::KeyD),
            up: keys.pressed(KeyCode::KeyW),
            down: keys.pressed(KeyCode::KeyS),
            fast: shift,
        }
    };

    frame.0 = InputSnapshot {
        pointer,
        primary_down: buttons.pressed(MouseButton::Left),
        secondary_down: buttons.pressed(MouseButton::Right),
        held,
        events,
    };
}
