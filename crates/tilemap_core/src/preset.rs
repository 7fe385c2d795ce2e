//! Preset（一组可选 tile 图片）。
//!
//! 核心只关心 tile 编号与标签；图片由前端的 [`PresetCatalog`] 实现负责加载，
//! 这里通过关联类型原样透传，不做任何解析。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::grid::TileIndex;

/// preset 来源（例如文件系统目录）。
pub trait PresetCatalog {
    type Image;

    /// 所有 preset 名称（已排序）。
    fn list_preset_names(&self) -> Result<Vec<String>>;

    /// 按 tile 编号升序返回该 preset 的全部 tile。
    fn load_preset(&self, name: &str) -> Result<Vec<(PresetTile, Self::Image)>>;
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetLimits {
    pub max_presets: usize,
    /// 侧边面板最多能显示的 tile 数。
    pub max_tiles: usize,
}

impl Default for PresetLimits {
    fn default() -> Self {
        Self {
            max_presets: 8,
            max_tiles: 11,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetTile {
    pub index: TileIndex,
    pub label: String,
}

/// 解析 `<index>_<label>.png` 形式的 tile 文件名。
///
/// 标签取最后一个 `_` 之后的部分；没有标签时用编号本身。
pub fn parse_tile_file_name(file_name: &str) -> Option<PresetTile> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if !ext.eq_ignore_ascii_case("png") {
        return None;
    }
    let (head, label) = match stem.split_once('_') {
        Some((head, rest)) => (head, rest.rsplit('_').next().unwrap_or(rest)),
        None => (stem, ""),
    };
    if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: TileIndex = head.parse().ok()?;
    let label = if label.is_empty() {
        index.to_string()
    } else {
        label.to_string()
    };
    Some(PresetTile { index, label })
}

/// 截断 preset 名称列表；超出上限时附带 `CapacityExceeded` 提示。
pub fn truncate_preset_names(
    mut names: Vec<String>,
    limits: &PresetLimits,
) -> (Vec<String>, Option<CoreError>) {
    let available = names.len();
    if available <= limits.max_presets {
        return (names, None);
    }
    log::warn!(
        "{available} presets found, only {} can be shown",
        limits.max_presets
    );
    names.truncate(limits.max_presets);
    (
        names,
        Some(CoreError::CapacityExceeded {
            what: "presets",
            available,
            capacity: limits.max_presets,
        }),
    )
}

/// 当前激活的调色板：tile 编号 + 标签 + 当前选中项。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PresetPalette {
    name: String,
    tiles: Vec<PresetTile>,
    selected: usize,
}

impl PresetPalette {
    /// 构建调色板：按编号排序、去重，超出 `max_tiles` 的部分截断并返回提示。
    pub fn new(
        name: impl Into<String>,
        mut tiles: Vec<PresetTile>,
        limits: &PresetLimits,
    ) -> (Self, Option<CoreError>) {
        let name = name.into();
        tiles.sort_by_key(|t| t.index);
        tiles.dedup_by_key(|t| t.index);

        let available = tiles.len();
        let warning = if available > limits.max_tiles {
            log::warn!(
                "preset '{name}' has {available} tiles, only {} can be shown",
                limits.max_tiles
            );
            tiles.truncate(limits.max_tiles);
            Some(CoreError::CapacityExceeded {
                what: "tiles",
                available,
                capacity: limits.max_tiles,
            })
        } else {
            None
        };

        (
            Self {
                name,
                tiles,
                selected: 0,
            },
            warning,
        )
    }

    /// 从 catalog 加载；返回调色板、全部图片（不截断，供渲染已放置的 tile）以及容量提示。
    pub fn load<C: PresetCatalog>(
        catalog: &C,
        name: &str,
        limits: &PresetLimits,
    ) -> Result<(Self, Vec<(TileIndex, C::Image)>, Option<CoreError>)> {
        let entries = catalog.load_preset(name)?;
        let mut tiles = Vec::with_capacity(entries.len());
        let mut images = Vec::with_capacity(entries.len());
        for (tile, image) in entries {
            images.push((tile.index, image));
            tiles.push(tile);
        }
        let (palette, warning) = Self::new(name, tiles, limits);
        Ok((palette, images, warning))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tiles(&self) -> &[PresetTile] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn selected_position(&self) -> usize {
        self.selected
    }

    /// 当前选中的 tile 编号；空调色板返回 `None`。
    pub fn selected_tile(&self) -> Option<TileIndex> {
        self.tiles.get(self.selected).map(|t| t.index)
    }

    /// 按面板位置选择。
    pub fn select(&mut self, position: usize) -> bool {
        if position >= self.tiles.len() {
            return false;
        }
        self.selected = position;
        true
    }

    /// 按 tile 编号选择。
    pub fn select_index(&mut self, index: TileIndex) -> bool {
        match self.tiles.iter().position(|t| t.index == index) {
            Some(pos) => {
                self.selected = pos;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_and_label() {
        let tile = parse_tile_file_name("3_grass.png").unwrap();
        assert_eq!(tile.index, 3);
        assert_eq!(tile.label, "grass");
    }

    #[test]
    fn label_is_last_underscore_part() {
        let tile = parse_tile_file_name("12_dark_stone.PNG").unwrap();
        assert_eq!(tile.index, 12);
        assert_eq!(tile.label, "stone");
    }

    #[test]
    fn bare_index_uses_number_as_label() {
        let tile = parse_tile_file_name("7.png").unwrap();
        assert_eq!(tile.label, "7");
    }

    #[test]
    fn rejects_non_png_and_non_numeric() {
        assert!(parse_tile_file_name("3_grass.jpg").is_none());
        assert!(parse_tile_file_name("grass_3.png").is_none());
        assert!(parse_tile_file_name("-1_void.png").is_none());
        assert!(parse_tile_file_name("readme").is_none());
    }
}
