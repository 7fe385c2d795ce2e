//! 配置文件与地图文件的读写。

use std::path::Path;

use bevy::prelude::*;

use tilemap_core::{GridStore, Result};
use tilemap_format::{MapFile, MapStore};

use super::paths::{maps_dir, settings_path};
use super::types::EditorSettings;

/// 读取配置；文件不存在时用默认值，格式错误时记录警告并用默认值。
pub fn load_settings() -> EditorSettings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> EditorSettings {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to read {}: {err}", path.display());
            }
            return EditorSettings::default();
        }
    };
    match ron::from_str::<EditorSettings>(&text) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("invalid settings file {}: {err}", path.display());
            EditorSettings::default()
        }
    }
}

pub fn save_settings(settings: &EditorSettings) -> std::result::Result<(), String> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &EditorSettings, path: &Path) -> std::result::Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let text = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())
        .map_err(|e| e.to_string())?;
    std::fs::write(path, text).map_err(|e| e.to_string())
}

pub fn map_store(settings: &EditorSettings) -> MapStore {
    MapStore::new(maps_dir(settings))
}

/// 当前地图打包成文件记录。
pub fn snapshot_map(grid: &GridStore, cell_size: (u32, u32)) -> MapFile {
    MapFile::new(grid.clone(), cell_size.0, cell_size.1)
}

/// 保存到地图目录，返回写入的路径。
pub fn save_named_map(settings: &EditorSettings, name: &str, map: &MapFile) -> Result<String> {
    let path = map_store(settings).save(name, map)?;
    Ok(path.to_string_lossy().to_string())
}

pub fn load_named_map(settings: &EditorSettings, name: &str) -> Result<MapFile> {
    map_store(settings).load(name)
}

/// 已保存的地图名，目录读取失败时视为空。
pub fn saved_map_names(settings: &EditorSettings) -> Vec<String> {
    match map_store(settings).list() {
        Ok(names) => names,
        Err(err) => {
            warn!("failed to list maps: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilemap_core::ResizePolicy;

    #[test]
    fn settings_survive_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets").join("settings.ron");

        let mut settings = EditorSettings::default();
        settings.resize_policy = ResizePolicy::RejectIfOccupied;
        settings.rows = 64;
        save_settings_to(&settings, &path).unwrap();

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let settings: EditorSettings = ron::from_str("(rows: 40, maps_dir: \"levels\")").unwrap();
        assert_eq!(settings.rows, 40);
        assert_eq!(settings.maps_dir, "levels");
        assert_eq!(settings.columns, 100);
        assert_eq!(settings.cell_width, 32);
    }

    #[test]
    fn missing_or_broken_settings_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("settings.ron");
        std::fs::write(&broken, "(rows: \"many\"").unwrap();

        assert_eq!(load_settings_from(&broken), EditorSettings::default());
        assert_eq!(
            load_settings_from(&dir.path().join("absent.ron")),
            EditorSettings::default()
        );
    }

    #[test]
    fn shipped_settings_match_defaults() {
        let text = include_str!("../../../../assets/settings.ron");
        let settings: EditorSettings = ron::from_str(text).unwrap();
        assert_eq!(settings, EditorSettings::default());
    }
}
