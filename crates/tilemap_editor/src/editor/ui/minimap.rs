use bevy::prelude::*;

use tilemap_core::{GridStore, MinimapLayout, MinimapRect, ViewportTransform};

use crate::editor::types::{MapRevision, MinimapMapRect, MinimapViewRect};
use crate::editor::{MINIMAP_HEIGHT_PX, MINIMAP_WIDTH_PX};

fn place(node: &mut Node, rect: Option<MinimapRect>) {
    let Some(rect) = rect else {
        node.display = Display::None;
        return;
    };
    node.display = Display::Flex;
    node.left = Val::Px(rect.x);
    node.top = Val::Px(rect.y);
    node.width = Val::Px(rect.width);
    node.height = Val::Px(rect.height);
}

/// 地图尺寸或视口变化时更新小地图上的两个矩形。
pub fn update_minimap(
    revision: Res<MapRevision>,
    grid: Res<GridStore>,
    viewport: Res<ViewportTransform>,
    mut map_q: Query<&mut Node, (With<MinimapMapRect>, Without<MinimapViewRect>)>,
    mut view_q: Query<&mut Node, (With<MinimapViewRect>, Without<MinimapMapRect>)>,
) {
    if !revision.is_changed() {
        return;
    }

    let layout = MinimapLayout::compute(
        MINIMAP_WIDTH_PX,
        MINIMAP_HEIGHT_PX,
        grid.columns(),
        grid.rows(),
        &viewport,
    );
    if let Ok(mut node) = map_q.single_mut() {
        place(&mut node, layout.map(|l| l.map));
    }
    if let Ok(mut node) = view_q.single_mut() {
        place(&mut node, layout.and_then(|l| l.visible_view()));
    }
}
