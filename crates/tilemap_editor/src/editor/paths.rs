//! 与 workspace/assets 路径相关的工具函数。

use std::path::PathBuf;

use super::types::{EditorSettings, SETTINGS_FILE};

/// workspace 的 `assets/` 目录绝对路径。
///
/// `CARGO_MANIFEST_DIR` 指向 `crates/tilemap_editor`，因此向上两级即可到 workspace 根。
pub fn workspace_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

pub fn settings_path() -> PathBuf {
    workspace_assets_dir().join(SETTINGS_FILE)
}

pub fn maps_dir(settings: &EditorSettings) -> PathBuf {
    workspace_assets_dir().join(&settings.maps_dir)
}

pub fn presets_dir(settings: &EditorSettings) -> PathBuf {
    workspace_assets_dir().join(&settings.presets_dir)
}

/// 生成 Bevy 资产路径（统一使用 `/` 分隔符）。
pub fn path_join_asset(dir: &str, file: &str) -> String {
    let dir = dir.trim_matches(['/', '\\']);
    let file = file.trim_matches(['/', '\\']);
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
