//! 地图名输入框：点击开始输入，Enter 确认，Esc 放弃，Backspace 删除。

use bevy::prelude::*;

use crate::editor::types::{CurrentMap, MapNameField, MapNameInput, Notices};

// 用 KeyCode 录入字符：不同平台下字符事件不一致，按键码最稳定。
const LETTER_KEYS: [(KeyCode, char); 26] = [
    (KeyCode::KeyA, 'a'),
    (KeyCode::KeyB, 'b'),
    (KeyCode::KeyC, 'c'),
    (KeyCode::KeyD, 'd'),
    (KeyCode::KeyE, 'e'),
    (KeyCode::KeyF, 'f'),
    (KeyCode::KeyG, 'g'),
    (KeyCode::KeyH, 'h'),
    (KeyCode::KeyI, 'i'),
    (KeyCode::KeyJ, 'j'),
    (KeyCode::KeyK, 'k'),
    (KeyCode::KeyL, 'l'),
    (KeyCode::KeyM, 'm'),
    (KeyCode::KeyN, 'n'),
    (KeyCode::KeyO, 'o'),
    (KeyCode::KeyP, 'p'),
    (KeyCode::KeyQ, 'q'),
    (KeyCode::KeyR, 'r'),
    (KeyCode::KeyS, 's'),
    (KeyCode::KeyT, 't'),
    (KeyCode::KeyU, 'u'),
    (KeyCode::KeyV, 'v'),
    (KeyCode::KeyW, 'w'),
    (KeyCode::KeyX, 'x'),
    (KeyCode::KeyY, 'y'),
    (KeyCode::KeyZ, 'z'),
];

const DIGIT_KEYS: [(KeyCode, char); 20] = [
    (KeyCode::Digit0, '0'),
    (KeyCode::Digit1, '1'),
    (KeyCode::Digit2, '2'),
    (KeyCode::Digit3, '3'),
    (KeyCode::Digit4, '4'),
    (KeyCode::Digit5, '5'),
    (KeyCode::Digit6, '6'),
    (KeyCode::Digit7, '7'),
    (KeyCode::Digit8, '8'),
    (KeyCode::Digit9, '9'),
    (KeyCode::Numpad0, '0'),
    (KeyCode::Numpad1, '1'),
    (KeyCode::Numpad2, '2'),
    (KeyCode::Numpad3, '3'),
    (KeyCode::Numpad4, '4'),
    (KeyCode::Numpad5, '5'),
    (KeyCode::Numpad6, '6'),
    (KeyCode::Numpad7, '7'),
    (KeyCode::Numpad8, '8'),
    (KeyCode::Numpad9, '9'),
];

/// 按键 → 地图名字符；Shift 产生大写字母和 `_`。
fn key_char(key: KeyCode, shift: bool) -> Option<char> {
    if let Some((_, ch)) = LETTER_KEYS.iter().find(|(k, _)| *k == key) {
        return Some(if shift { ch.to_ascii_uppercase() } else { *ch });
    }
    if let Some((_, ch)) = DIGIT_KEYS.iter().find(|(k, _)| *k == key) {
        return Some(*ch);
    }
    match key {
        KeyCode::Minus if shift => Some('_'),
        KeyCode::Minus => Some('-'),
        KeyCode::Period => Some('.'),
        _ => None,
    }
}

pub fn map_name_field_click(
    field_q: Query<&Interaction, (Changed<Interaction>, With<MapNameField>)>,
    current: Res<CurrentMap>,
    mut input: ResMut<MapNameInput>,
) {
    let pressed = field_q.iter().any(|i| *i == Interaction::Pressed);
    if pressed && !input.is_editing() {
        input.begin(&current.name);
    }
}

pub fn map_name_text_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MapNameInput>,
    mut current: ResMut<CurrentMap>,
    mut notices: ResMut<Notices>,
) {
    if !input.is_editing() {
        return;
    }

    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
    for key in keys.get_just_pressed() {
        match key {
            KeyCode::Enter | KeyCode::NumpadEnter => match input.commit() {
                Ok(name) => {
                    let line = format!("map name set to '{name}'");
                    info!("{line}");
                    notices.push(line);
                    current.name = name;
                }
                Err(err) => {
                    warn!("{err}");
                    notices.push(err.to_string());
                }
            },
            KeyCode::Escape => input.cancel(),
            KeyCode::Backspace => input.backspace(),
            other => {
                if let Some(ch) = key_char(*other, shift) {
                    input.push(ch);
                }
            }
        }
    }
}
