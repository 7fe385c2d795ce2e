//! 基于文件系统目录的 preset catalog。

use std::path::PathBuf;

use bevy::prelude::*;

use tilemap_core::{parse_tile_file_name, CoreError, PresetCatalog, PresetTile, Result};

use super::super::paths::path_join_asset;

pub struct FsPresetCatalog {
    /// preset 根目录的绝对路径（用于扫描）。
    root: PathBuf,
    /// 同一目录相对 `assets/` 的路径（用于 AssetServer 加载）。
    asset_dir: String,
    asset_server: AssetServer,
}

impl FsPresetCatalog {
    pub fn new(root: PathBuf, asset_dir: impl Into<String>, asset_server: AssetServer) -> Self {
        Self {
            root,
            asset_dir: asset_dir.into(),
            asset_server,
        }
    }
}

impl PresetCatalog for FsPresetCatalog {
    type Image = Handle<Image>;

    fn list_preset_names(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn load_preset(&self, name: &str) -> Result<Vec<(PresetTile, Handle<Image>)>> {
        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Err(CoreError::PresetNotFound(name.to_string()));
        }

        let mut found = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            match parse_tile_file_name(&file_name) {
                Some(tile) => found.push((tile, file_name)),
                None => debug!("skipping '{file_name}' in preset '{name}'"),
            }
        }
        found.sort_by_key(|(tile, _)| tile.index);

        let preset_dir = path_join_asset(&self.asset_dir, name);
        Ok(found
            .into_iter()
            .map(|(tile, file_name)| {
                let image: Handle<Image> = self
                    .asset_server
                    .load(path_join_asset(&preset_dir, &file_name));
                (tile, image)
            })
            .collect())
    }
}
