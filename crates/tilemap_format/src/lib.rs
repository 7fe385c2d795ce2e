#![forbid(unsafe_code)]

//! 地图文件格式。
//!
//! - `.map`：二进制格式，4 个 little-endian `i32` 头（rows/columns/cell_width/cell_height），
//!   随后是按行优先排列的全部格子。
//! - `.ron`：导出/导入用的文本格式，字段与二进制格式一一对应。

mod binary;
mod ron_file;
mod store;

use std::path::Path;

use tilemap_core::{GridStore, Result};

pub use binary::{decode_map, encode_map, HEADER_LEN};
pub use ron_file::{decode_map_ron, encode_map_ron};
pub use store::{validate_map_name, MapStore, MAP_EXTENSION};

/// 一张完整地图：尺寸 + 格子尺寸 + 内容。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapFile {
    pub cell_width: u32,
    pub cell_height: u32,
    pub grid: GridStore,
}

impl MapFile {
    pub fn new(grid: GridStore, cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            grid,
        }
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    pub fn columns(&self) -> u32 {
        self.grid.columns()
    }
}

/// 按扩展名区分的文件格式。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapFormat {
    Binary,
    Ron,
}

impl MapFormat {
    /// `.ron` 为文本格式，其余一律按二进制处理。
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => MapFormat::Ron,
            _ => MapFormat::Binary,
        }
    }
}

/// 写到任意路径（导出）；父目录不存在时自动创建。
pub fn write_map_file(path: &Path, map: &MapFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match MapFormat::from_path(path) {
        MapFormat::Binary => std::fs::write(path, encode_map(map))?,
        MapFormat::Ron => std::fs::write(path, encode_map_ron(map)?)?,
    }
    log::debug!("map written to {}", path.display());
    Ok(())
}

/// 从任意路径读取（导入）。
pub fn read_map_file(path: &Path) -> Result<MapFile> {
    let result = match MapFormat::from_path(path) {
        MapFormat::Binary => decode_map(&std::fs::read(path)?),
        MapFormat::Ron => decode_map_ron(&std::fs::read_to_string(path)?),
    };
    result.inspect_err(|err| log::warn!("failed to read {}: {err}", path.display()))
}
