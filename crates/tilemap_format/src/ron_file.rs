//! RON 文本格式（导出/导入用）。

use serde::{Deserialize, Serialize};

use tilemap_core::{CoreError, GridStore, Result, TileIndex, EMPTY_TILE};

use crate::MapFile;

#[derive(Serialize, Deserialize)]
struct MapFileRon {
    rows: u32,
    columns: u32,
    cell_width: u32,
    cell_height: u32,
    /// 行优先，`-1` 为空。
    tiles: Vec<TileIndex>,
}

pub fn encode_map_ron(map: &MapFile) -> Result<String> {
    let file = MapFileRon {
        rows: map.rows(),
        columns: map.columns(),
        cell_width: map.cell_width,
        cell_height: map.cell_height,
        tiles: map.grid.cells().to_vec(),
    };
    ron::ser::to_string_pretty(&file, ron::ser::PrettyConfig::default()).map_err(|e| {
        CoreError::CorruptData {
            reason: e.to_string(),
        }
    })
}

pub fn decode_map_ron(text: &str) -> Result<MapFile> {
    let file = ron::from_str::<MapFileRon>(text).map_err(|e| CoreError::CorruptData {
        reason: e.to_string(),
    })?;
    if file.rows == 0 || file.columns == 0 || file.cell_width == 0 || file.cell_height == 0 {
        return Err(CoreError::CorruptData {
            reason: "map dimensions must be positive".to_string(),
        });
    }
    if let Some(tile) = file.tiles.iter().find(|&&t| t < EMPTY_TILE) {
        return Err(CoreError::CorruptData {
            reason: format!("invalid tile index {tile}"),
        });
    }
    let grid = GridStore::from_cells(file.rows, file.columns, file.tiles)?;
    Ok(MapFile::new(grid, file.cell_width, file.cell_height))
}
