//! UI 根节点与静态 UI 树构建。

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use tilemap_core::Preference;

use crate::editor::types::{
    ActionButton, ActionKind, ConfirmButton, ConfirmLabel, ConfirmRow, MapCycleButton,
    MapNameField, MapNameLabel, MinimapMapRect, MinimapViewRect, NoticesText, PaletteRoot,
    PolicyLabel, PolicyToggleButton, PreferenceButton, PreferenceLabel, PresetCycleButton,
    PresetLabel, QuickButton, QuickKind, StatusText,
};
use crate::editor::{
    BOTTOM_PANEL_HEIGHT_PX, MINIMAP_HEIGHT_PX, MINIMAP_WIDTH_PX, RIGHT_PANEL_WIDTH_PX, UI_BUTTON,
    UI_MINIMAP_BG, UI_MINIMAP_MAP, UI_MINIMAP_VIEW, UI_PANEL,
};

/// 每次点击 `-` / `+` 的步长。
fn preference_step(preference: Preference) -> i32 {
    match preference {
        Preference::Rows | Preference::Columns => 10,
        Preference::CellWidth | Preference::CellHeight => 2,
    }
}

fn label(p: &mut ChildSpawnerCommands, text: impl Into<String>, size: f32) {
    p.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(Color::WHITE),
    ));
}

fn button(p: &mut ChildSpawnerCommands, text: &str, marker: impl Bundle) {
    p.spawn((
        Button,
        Node {
            height: Val::Px(26.0),
            min_width: Val::Px(26.0),
            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(UI_BUTTON),
        marker,
    ))
    .with_children(|p| label(p, text, 13.0));
}

fn row(p: &mut ChildSpawnerCommands, build: impl FnOnce(&mut ChildSpawnerCommands)) {
    p.spawn(Node {
        width: Val::Percent(100.0),
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::Wrap,
        align_items: AlignItems::Center,
        column_gap: Val::Px(6.0),
        row_gap: Val::Px(6.0),
        ..default()
    })
    .with_children(build);
}

/// 一行 “◀ 标签 ▶” 选择器。
fn selector(p: &mut ChildSpawnerCommands, prev: impl Bundle, label_marker: impl Bundle, next: impl Bundle) {
    row(p, |p| {
        button(p, "<", prev);
        p.spawn((
            Text::new(""),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                flex_grow: 1.0,
                ..default()
            },
            label_marker,
        ));
        button(p, ">", next);
    });
}

/// UI 初始化：右侧面板 + 底部面板。
pub fn setup_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            // 重要：UI 画在世界之上。这里必须透明，否则会把画布整块盖住。
            BackgroundColor(Color::NONE),
        ))
        .with_children(|root| {
            root.spawn(Node {
                width: Val::Percent(100.0),
                flex_grow: 1.0,
                flex_direction: FlexDirection::Row,
                ..default()
            })
            .with_children(|top| {
                // 画布区域（透明占位）
                top.spawn(Node {
                    flex_grow: 1.0,
                    height: Val::Percent(100.0),
                    ..default()
                });
                top.spawn((
                    Node {
                        width: Val::Px(RIGHT_PANEL_WIDTH_PX),
                        height: Val::Percent(100.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(10.0)),
                        row_gap: Val::Px(8.0),
                        overflow: Overflow::clip(),
                        ..default()
                    },
                    BackgroundColor(UI_PANEL),
                ))
                .with_children(spawn_right_panel);
            });

            root.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(BOTTOM_PANEL_HEIGHT_PX),
                    flex_direction: FlexDirection::Row,
                    padding: UiRect::all(Val::Px(8.0)),
                    column_gap: Val::Px(8.0),
                    ..default()
                },
                BackgroundColor(UI_PANEL),
            ))
            .with_children(|bottom| {
                bottom
                    .spawn(Node {
                        flex_grow: 1.0,
                        height: Val::Percent(100.0),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(6.0),
                        overflow: Overflow::clip(),
                        ..default()
                    })
                    .with_children(|p| {
                        p.spawn((
                            Text::new(""),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                            StatusText,
                        ));
                        p.spawn((
                            Text::new(""),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.95, 0.8, 0.45)),
                            NoticesText,
                        ));
                    });
                bottom
                    .spawn((
                        Node {
                            width: Val::Px(MINIMAP_WIDTH_PX),
                            height: Val::Px(MINIMAP_HEIGHT_PX),
                            flex_shrink: 0.0,
                            overflow: Overflow::clip(),
                            ..default()
                        },
                        BackgroundColor(UI_MINIMAP_BG),
                    ))
                    .with_children(spawn_minimap);
            });
        });
}

fn outline(width: f32, color: Color) -> impl Bundle {
    (
        Node {
            position_type: PositionType::Absolute,
            border: UiRect::all(Val::Px(width)),
            ..default()
        },
        BorderColor::all(color),
    )
}

/// 小地图：两个绝对定位的描边矩形，位置由 `update_minimap` 写入。
fn spawn_minimap(p: &mut ChildSpawnerCommands) {
    p.spawn((outline(1.0, UI_MINIMAP_MAP), MinimapMapRect));
    p.spawn((outline(2.0, UI_MINIMAP_VIEW), MinimapViewRect));
}

fn spawn_right_panel(p: &mut ChildSpawnerCommands) {
    label(p, "Tiles", 15.0);
    selector(p, PresetCycleButton(-1), PresetLabel, PresetCycleButton(1));

    // 调色板按钮由 build_palette_when_changed 生成
    p.spawn((
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(6.0),
            min_height: Val::Px(48.0),
            ..default()
        },
        PaletteRoot,
    ));

    row(p, |p| {
        for (text, kind) in [
            ("Undo", QuickKind::Undo),
            ("Redo", QuickKind::Redo),
            ("Grid", QuickKind::ToggleGrid),
            ("Zoom+", QuickKind::ZoomIn),
            ("Zoom-", QuickKind::ZoomOut),
        ] {
            button(p, text, QuickButton(kind));
        }
    });

    label(p, "Map", 15.0);
    row(p, |p| {
        button(p, "<", MapCycleButton(-1));
        // 点击后输入新名字，Enter 确认，Esc 放弃
        p.spawn((
            Button,
            Node {
                height: Val::Px(26.0),
                flex_grow: 1.0,
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(UI_BUTTON),
            MapNameField,
        ))
        .with_children(|p| {
            p.spawn((
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                MapNameLabel,
            ));
        });
        button(p, ">", MapCycleButton(1));
    });
    row(p, |p| {
        for (text, kind) in [
            ("New", ActionKind::NewMap),
            ("Save", ActionKind::SaveMap),
            ("Load", ActionKind::LoadMap),
            ("Export", ActionKind::ExportMap),
            ("Import", ActionKind::ImportMap),
            ("Wipe", ActionKind::Wipe),
            ("Crop", ActionKind::Crop),
        ] {
            button(p, text, ActionButton(kind));
        }
    });

    // 破坏性操作的确认行，默认隐藏
    p.spawn((
        Node {
            width: Val::Percent(100.0),
            display: Display::None,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            align_items: AlignItems::Center,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(6.0),
            ..default()
        },
        ConfirmRow,
    ))
    .with_children(|p| {
        p.spawn((
            Text::new(""),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.8, 0.45)),
            ConfirmLabel,
        ));
        button(p, "OK", ConfirmButton(true));
        button(p, "Cancel", ConfirmButton(false));
    });

    label(p, "Preferences", 15.0);
    for preference in Preference::ALL {
        let step = preference_step(preference);
        row(p, |p| {
            button(
                p,
                "-",
                PreferenceButton {
                    preference,
                    delta: -step,
                },
            );
            button(
                p,
                "+",
                PreferenceButton {
                    preference,
                    delta: step,
                },
            );
            p.spawn((
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                PreferenceLabel(preference),
            ));
        });
    }
    row(p, |p| {
        button(p, "Toggle", PolicyToggleButton);
        p.spawn((
            Text::new(""),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(Color::WHITE),
            PolicyLabel,
        ));
    });
}
