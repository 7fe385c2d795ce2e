use bevy::prelude::*;

use tilemap_core::{GridStore, TileIndex, ViewportTransform, VisibleRange, EMPTY_TILE};

use crate::editor::types::{MapRevision, TileImages, TileLayer, TileSprite};
use crate::editor::util::despawn_silently;

/// 可见范围外多生成的一圈格子；滚动不超出这一圈时只移动父节点。
const RANGE_MARGIN: u32 = 8;

/// 没有图片的 tile 编号用固定的颜色块代替（同一编号颜色不变）。
fn placeholder_color(tile: TileIndex) -> Color {
    let hue = (tile.rem_euclid(360) as f32 * 47.0) % 360.0;
    Color::hsl(hue, 0.55, 0.5)
}

/// 视口 → 父节点变换：子节点用未缩放的地图像素，`(x, -y)` 朝下。
fn layer_transform(viewport: &ViewportTransform) -> Transform {
    let (scroll_x, scroll_y) = viewport.scroll();
    let scale = viewport.scale();
    Transform::from_xyz(scroll_x * scale, -scroll_y * scale, 0.0)
        .with_scale(Vec3::new(scale, scale, 1.0))
}

/// 已生成的 sprite 对应的状态。
#[derive(Default)]
pub struct BuiltTiles {
    grid: Option<u64>,
    cell_size: (u32, u32),
    range: VisibleRange,
}

/// 同步地图 sprite：
/// - 滚动/缩放只更新父节点 `Transform`
/// - 地图内容、格子尺寸、图片表变化，或可见范围超出已生成范围时才重建
pub fn sync_tile_sprites(
    mut commands: Commands,
    revision: Res<MapRevision>,
    images: Res<TileImages>,
    grid: Res<GridStore>,
    viewport: Res<ViewportTransform>,
    sprites: Query<Entity, With<TileSprite>>,
    mut layer_q: Query<(Entity, &mut Transform), With<TileLayer>>,
    mut built: Local<BuiltTiles>,
) {
    let Ok((layer, mut transform)) = layer_q.single_mut() else {
        return;
    };
    transform.set_if_neq(layer_transform(&viewport));

    let (columns, rows) = (grid.columns(), grid.rows());
    let visible = viewport.visible_range(columns, rows);
    let stale = built.grid != Some(revision.grid)
        || built.cell_size != viewport.cell_size()
        || images.is_changed()
        || !built.range.covers(&visible);
    if !stale {
        return;
    }

    for e in sprites.iter() {
        despawn_silently(&mut commands, e);
    }

    let range = visible.expanded(RANGE_MARGIN, columns, rows);
    *built = BuiltTiles {
        grid: Some(revision.grid),
        cell_size: viewport.cell_size(),
        range,
    };

    let (cell_w, cell_h) = viewport.cell_size();
    let (cell_w, cell_h) = (cell_w as f32, cell_h as f32);
    let size = Vec2::new(cell_w, cell_h);
    commands.entity(layer).with_children(|p| {
        for y in range.rows() {
            let Some(row) = grid.row(y) else {
                continue;
            };
            for x in range.columns() {
                let Some(&tile) = row.get(x as usize) else {
                    continue;
                };
                if tile == EMPTY_TILE {
                    continue;
                }
                let sprite = match images.by_index.get(&tile) {
                    Some(image) => Sprite {
                        image: image.clone(),
                        custom_size: Some(size),
                        ..default()
                    },
                    None => Sprite::from_color(placeholder_color(tile), size),
                };
                p.spawn((
                    sprite,
                    Transform::from_xyz(
                        (x as f32 + 0.5) * cell_w,
                        -(y as f32 + 0.5) * cell_h,
                        0.0,
                    ),
                    TileSprite,
                ));
            }
        }
    });
}
