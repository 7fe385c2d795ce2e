//! Tilemap 编辑器前端（Bevy 0.18）。
//!
//! 目标：
//! - 左上画布：左键放置、右键删除，WASD 滚动，滚轮/`=` `-` 缩放
//! - 右侧面板：preset 调色板、地图操作、偏好设置
//! - 底部面板：状态行与提示信息，右下角小地图
//!
//! 说明：
//! - 地图、历史、视口三份状态直接作为资源保存，编辑统一经由 `tilemap_core::EditController`。
//! - 画布只是窗口左上角的一块区域，UI 根节点在这里保持透明。

mod paths;
mod persistence;
mod preset;
mod types;
mod ui;
mod util;
mod world;

mod app;

use bevy::prelude::Color;

/// 右侧面板宽度。
pub const RIGHT_PANEL_WIDTH_PX: f32 = 300.0;
/// 底部面板高度。
pub const BOTTOM_PANEL_HEIGHT_PX: f32 = 160.0;
pub const TILE_BUTTON_PX: f32 = 48.0;
/// 小地图区域（底部面板右端，扣掉内边距）。
pub const MINIMAP_WIDTH_PX: f32 = RIGHT_PANEL_WIDTH_PX - 16.0;
pub const MINIMAP_HEIGHT_PX: f32 = BOTTOM_PANEL_HEIGHT_PX - 16.0;

pub const UI_BG: Color = Color::srgb(0.12, 0.12, 0.12);
pub const UI_PANEL: Color = Color::srgb(0.16, 0.16, 0.16);
pub const UI_HIGHLIGHT: Color = Color::srgb(0.25, 0.45, 0.95);
pub const UI_BUTTON: Color = Color::srgb(0.22, 0.22, 0.22);
pub const UI_BUTTON_HOVER: Color = Color::srgb(0.28, 0.28, 0.28);
pub const UI_BUTTON_PRESS: Color = Color::srgb(0.35, 0.35, 0.35);
pub const UI_MINIMAP_BG: Color = Color::srgb(0.09, 0.09, 0.09);
pub const UI_MINIMAP_MAP: Color = Color::srgb(0.55, 0.55, 0.55);
pub const UI_MINIMAP_VIEW: Color = Color::srgb(0.95, 0.8, 0.3);

pub use app::run;
