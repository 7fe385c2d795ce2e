//! 启动时加载所有 preset，以及运行时切换 preset。

use bevy::prelude::*;

use tilemap_core::{truncate_preset_names, PresetCatalog, PresetLimits, PresetPalette};

use super::super::paths::presets_dir;
use super::super::types::{EditorSettings, Notices, PresetState, TileImages};
use super::FsPresetCatalog;

fn catalog(settings: &EditorSettings, asset_server: &AssetServer) -> FsPresetCatalog {
    FsPresetCatalog::new(
        presets_dir(settings),
        settings.presets_dir.clone(),
        asset_server.clone(),
    )
}

/// 载入一个 preset：登记图片，返回调色板。失败时写入提示并返回 `None`。
fn load_palette(
    catalog: &FsPresetCatalog,
    name: &str,
    limits: &PresetLimits,
    images: &mut TileImages,
    notices: &mut Notices,
) -> Option<PresetPalette> {
    match PresetPalette::load(catalog, name, limits) {
        Ok((palette, loaded, warning)) => {
            images.register(loaded);
            if let Some(warning) = warning {
                notices.push(format!("{name}: {warning}"));
            }
            Some(palette)
        }
        Err(err) => {
            warn!("failed to load preset '{name}': {err}");
            notices.push(format!("failed to load preset '{name}': {err}"));
            None
        }
    }
}

/// 启动时扫描 preset 目录，预加载全部图片（用于回显），默认激活第一个。
pub fn load_presets_startup(
    asset_server: Res<AssetServer>,
    settings: Res<EditorSettings>,
    mut state: ResMut<PresetState>,
    mut images: ResMut<TileImages>,
    mut notices: ResMut<Notices>,
) {
    let catalog = catalog(&settings, &asset_server);
    let names = match catalog.list_preset_names() {
        Ok(names) => names,
        Err(err) => {
            warn!("failed to list presets: {err}");
            notices.push(format!("failed to list presets: {err}"));
            return;
        }
    };
    let (names, warning) = truncate_preset_names(names, &settings.presets);
    if let Some(warning) = warning {
        notices.push(warning.to_string());
    }
    if names.is_empty() {
        notices.push(format!(
            "no presets found under assets/{}",
            settings.presets_dir
        ));
        return;
    }

    // 倒序加载，让第一个 preset 的图片最后登记（编号冲突时以它为准）
    let mut first = None;
    for (position, name) in names.iter().enumerate().rev() {
        if let Some(palette) =
            load_palette(&catalog, name, &settings.presets, &mut images, &mut notices)
        {
            first = Some((position, palette));
        }
    }

    state.names = names;
    if let Some((position, palette)) = first {
        state.active = position;
        info!(
            "preset '{}' active with {} tiles",
            palette.name(),
            palette.tiles().len()
        );
        state.palette = palette;
    }
}

/// 切换到相邻的 preset（`step` 为 ±1，循环）。
pub fn cycle_preset(
    step: i32,
    asset_server: &AssetServer,
    settings: &EditorSettings,
    state: &mut PresetState,
    images: &mut TileImages,
    notices: &mut Notices,
) {
    let count = state.names.len();
    if count < 2 {
        return;
    }
    let next = (state.active as i64 + step as i64).rem_euclid(count as i64) as usize;
    let name = state.names[next].clone();

    let catalog = catalog(settings, asset_server);
    if let Some(palette) = load_palette(&catalog, &name, &settings.presets, images, notices) {
        state.active = next;
        state.palette = palette;
        info!("switched to preset '{name}'");
    }
}
