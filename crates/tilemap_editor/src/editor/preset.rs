//! Preset（一组 tile 图片）的发现与加载。
//!
//! 职责：
//! - 扫描 `assets/presets/<preset>/` 下的 `<index>_<label>.png`
//! - 通过 Bevy AssetServer 加载图片，登记到 `TileImages`
//! - 维护当前调色板（`PresetState`）

mod catalog;
mod library;

pub use catalog::FsPresetCatalog;
pub use library::{cycle_preset, load_presets_startup};
