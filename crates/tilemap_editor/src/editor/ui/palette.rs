//! 右侧调色板：当前 preset 的 tile 按钮，点击选 tile。

use bevy::prelude::*;

use crate::editor::types::{PaletteRoot, PaletteTileButton, PresetState, TileImages};
use crate::editor::util::despawn_children;
use crate::editor::{TILE_BUTTON_PX, UI_BUTTON, UI_HIGHLIGHT};

/// preset 或选中项变化时重建调色板（在 PostUpdate 里、布局之前运行）。
pub fn build_palette_when_changed(
    mut commands: Commands,
    presets: Res<PresetState>,
    images: Res<TileImages>,
    palette_q: Query<Entity, With<PaletteRoot>>,
    children_q: Query<&Children>,
) {
    if !presets.is_changed() && !images.is_changed() {
        return;
    }
    let Ok(palette_entity) = palette_q.single() else {
        return;
    };

    despawn_children(&mut commands, &children_q, palette_entity);

    let palette = &presets.palette;
    let selected = palette.selected_position();
    commands.entity(palette_entity).with_children(|p| {
        for (position, tile) in palette.tiles().iter().enumerate() {
            let bg = if position == selected {
                UI_HIGHLIGHT
            } else {
                UI_BUTTON
            };
            p.spawn((
                Button,
                Node {
                    width: Val::Px(TILE_BUTTON_PX),
                    height: Val::Px(TILE_BUTTON_PX),
                    padding: UiRect::all(Val::Px(3.0)),
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                BackgroundColor(bg),
                PaletteTileButton { position },
            ))
            .with_children(|p| match images.by_index.get(&tile.index) {
                Some(image) => {
                    p.spawn((
                        ImageNode::new(image.clone()),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                }
                None => {
                    p.spawn((
                        Text::new(tile.label.clone()),
                        TextFont {
                            font_size: 11.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                }
            });
        }
    });
}

pub fn palette_tile_click(
    button_q: Query<(&Interaction, &PaletteTileButton), Changed<Interaction>>,
    mut presets: ResMut<PresetState>,
) {
    for (interaction, button) in button_q.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if button.position != presets.palette.selected_position() {
            presets.palette.select(button.position);
        }
    }
}
