use bevy::prelude::*;

use tilemap_core::Preference;

/// 右侧调色板容器（按钮在 preset 变化时重建）。
#[derive(Component)]
pub struct PaletteRoot;

/// 调色板按钮；`position` 是在调色板中的位置。
#[derive(Component)]
pub struct PaletteTileButton {
    pub position: usize,
}

/// 切换 preset：`-1` 上一个，`1` 下一个。
#[derive(Component)]
pub struct PresetCycleButton(pub i32);

#[derive(Component)]
pub struct PresetLabel;

/// 切换地图名（在已保存的地图之间循环）。
#[derive(Component)]
pub struct MapCycleButton(pub i32);

#[derive(Component)]
pub struct MapNameLabel;

/// 地图名输入框（点击后开始输入）。
#[derive(Component)]
pub struct MapNameField;

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuickKind {
    Undo,
    Redo,
    ToggleGrid,
    ZoomIn,
    ZoomOut,
}

#[derive(Component)]
pub struct QuickButton(pub QuickKind);

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionKind {
    NewMap,
    SaveMap,
    LoadMap,
    ExportMap,
    ImportMap,
    Wipe,
    Crop,
}

impl ActionKind {
    /// 破坏性操作需要先确认；返回确认提示。
    pub fn confirmation_prompt(self) -> Option<&'static str> {
        match self {
            ActionKind::NewMap => Some("Start a new map? Undo history is cleared."),
            ActionKind::Wipe => Some("Wipe every tile?"),
            ActionKind::Crop => Some("Crop the map to its tiles?"),
            ActionKind::SaveMap
            | ActionKind::LoadMap
            | ActionKind::ExportMap
            | ActionKind::ImportMap => None,
        }
    }
}

#[derive(Component)]
pub struct ActionButton(pub ActionKind);

/// 确认行（有待确认的操作时显示）。
#[derive(Component)]
pub struct ConfirmRow;

#[derive(Component)]
pub struct ConfirmLabel;

/// `true` 为 OK，`false` 为 Cancel。
#[derive(Component)]
pub struct ConfirmButton(pub bool);

/// 偏好设置的 `-` / `+` 按钮。
#[derive(Component)]
pub struct PreferenceButton {
    pub preference: Preference,
    pub delta: i32,
}

#[derive(Component)]
pub struct PreferenceLabel(pub Preference);

#[derive(Component)]
pub struct PolicyToggleButton;

#[derive(Component)]
pub struct PolicyLabel;

/// 底部状态行。
#[derive(Component)]
pub struct StatusText;

#[derive(Component)]
pub struct NoticesText;

/// 小地图中的地图轮廓。
#[derive(Component)]
pub struct MinimapMapRect;

/// 小地图中的视口矩形。
#[derive(Component)]
pub struct MinimapViewRect;

/// 地图 sprite 的父节点，携带视口的滚动与缩放。
#[derive(Component)]
pub struct TileLayer;

/// 地图格子 sprite（只生成可见范围附近的非空格子），坐标是未缩放的地图像素。
#[derive(Component)]
pub struct TileSprite;
