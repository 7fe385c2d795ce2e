use std::collections::HashMap;

use bevy::prelude::*;

use tilemap_core::{PresetPalette, TileIndex};

/// 可用 preset 列表 + 当前调色板。
#[derive(Resource, Default)]
pub struct PresetState {
    pub names: Vec<String>,
    pub active: usize,
    pub palette: PresetPalette,
}

impl PresetState {
    pub fn active_name(&self) -> Option<&str> {
        self.names.get(self.active).map(String::as_str)
    }

    pub fn selected_tile(&self) -> Option<TileIndex> {
        self.palette.selected_tile()
    }
}

/// tile 编号 → 图片。所有 preset 的图片都会登记，切换 preset 后已放置的 tile 仍能显示。
#[derive(Resource, Default)]
pub struct TileImages {
    pub by_index: HashMap<TileIndex, Handle<Image>>,
}

impl TileImages {
    pub fn register(&mut self, images: impl IntoIterator<Item = (TileIndex, Handle<Image>)>) {
        self.by_index.extend(images);
    }
}
