#![forbid(unsafe_code)]

// 纯逻辑 crate：地图格子数据、视口变换、撤销/重做与编辑控制。
//
// 不依赖任何渲染/窗口库；前端（tilemap_editor）每帧把输入快照喂给
// `EditController`，再从 `GridStore` + `ViewportTransform` 读取需要绘制的格子。

mod controller;
mod error;
mod grid;
mod history;
mod input;
mod minimap;
mod preferences;
mod preset;
mod viewport;

pub use controller::{EditController, FrameReport};
pub use error::{CoreError, Result};
pub use grid::{GridStore, ResizePolicy, ResizeReport, TileIndex, EMPTY_TILE};
pub use history::{HistoryRecord, HistoryStack, MAX_TILE_TRACKING};
pub use input::{EditorKey, HeldKeys, InputSnapshot};
pub use minimap::{MinimapLayout, MinimapRect};
pub use preferences::{GridLimits, Preference, PreferenceChange};
pub use preset::{
    parse_tile_file_name, truncate_preset_names, PresetCatalog, PresetLimits, PresetPalette,
    PresetTile,
};
pub use viewport::{ScrollDirection, ScrollSettings, ViewportTransform, VisibleRange, ZoomLimits};
