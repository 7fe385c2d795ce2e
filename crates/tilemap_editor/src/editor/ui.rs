//! UI（右侧面板 + 底部面板）。
//!
//! 右侧：preset 切换、调色板、快捷按钮、地图操作、偏好设置。
//! 底部：状态行 + 提示信息 + 小地图。
//! 左上角剩余区域是画布，UI 根节点在这里保持透明。

mod actions;
mod hud;
mod map_name;
mod minimap;
mod palette;
mod preferences;
mod root;
mod selectors;

pub use actions::{
    action_button_click, button_hover_styles, confirm_button_click, quick_button_click,
    update_confirm_row,
};
pub use hud::{update_notices_text, update_panel_labels, update_status_text};
pub use map_name::{map_name_field_click, map_name_text_input};
pub use minimap::update_minimap;
pub use palette::{build_palette_when_changed, palette_tile_click};
pub use preferences::{policy_toggle_click, preference_button_click};
pub use root::setup_ui;
pub use selectors::{map_cycle_click, preset_cycle_click};
