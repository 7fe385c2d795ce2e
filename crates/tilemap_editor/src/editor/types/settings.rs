use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use tilemap_core::{GridLimits, PresetLimits, ResizePolicy, ScrollSettings, ZoomLimits, MAX_TILE_TRACKING};

/// 相对 `assets/` 的配置文件路径。
pub const SETTINGS_FILE: &str = "settings.ron";

/// 编辑器配置（`assets/settings.ron`）。
///
/// 字段缺省时取默认值，所以配置文件可以只写需要改的几项。
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    pub window_title: String,
    /// 相对 `assets/` 的地图目录。
    pub maps_dir: String,
    /// 相对 `assets/` 的 preset 目录，每个子目录是一个 preset。
    pub presets_dir: String,
    pub default_map_name: String,
    pub rows: u32,
    pub columns: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub history_capacity: usize,
    pub resize_policy: ResizePolicy,
    pub limits: GridLimits,
    pub zoom: ZoomLimits,
    pub scroll: ScrollSettings,
    pub presets: PresetLimits,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            window_title: "Tilemap Studio".to_string(),
            maps_dir: "maps".to_string(),
            presets_dir: "presets".to_string(),
            default_map_name: "level".to_string(),
            rows: 100,
            columns: 100,
            cell_width: 32,
            cell_height: 32,
            history_capacity: MAX_TILE_TRACKING,
            resize_policy: ResizePolicy::default(),
            limits: GridLimits::default(),
            zoom: ZoomLimits::default(),
            scroll: ScrollSettings::default(),
            presets: PresetLimits::default(),
        }
    }
}
