//! 地图目录：每张地图一个 `<name>.map` 文件。

use std::path::{Path, PathBuf};

use tilemap_core::{CoreError, Result};

use crate::{decode_map, encode_map, MapFile};

pub const MAP_EXTENSION: &str = "map";

/// 地图名不能为空，也不能包含路径分隔符或 `..`。
pub fn validate_map_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed.contains(['/', '\\'])
        || trimmed.contains("..")
        || trimmed != name
    {
        return Err(CoreError::InvalidMapName(name.to_string()));
    }
    Ok(trimmed)
}

#[derive(Clone, Debug)]
pub struct MapStore {
    dir: PathBuf,
}

impl MapStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let name = validate_map_name(name)?;
        Ok(self.dir.join(format!("{name}.{MAP_EXTENSION}")))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// 保存（覆盖同名地图）。
    pub fn save(&self, name: &str, map: &MapFile) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, encode_map(map))?;
        log::debug!(
            "saved map '{name}' ({}x{}) to {}",
            map.columns(),
            map.rows(),
            path.display()
        );
        Ok(path)
    }

    /// 读取；文件损坏时返回 `CorruptData`，调用方的地图保持不变。
    pub fn load(&self, name: &str) -> Result<MapFile> {
        let path = self.path_for(name)?;
        let bytes = std::fs::read(&path)?;
        decode_map(&bytes).inspect_err(|err| {
            log::warn!("map '{name}' could not be decoded: {err}");
        })
    }

    /// 已保存的地图名（排序）。目录不存在时返回空列表。
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let is_map = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == MAP_EXTENSION);
            if !is_map {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
