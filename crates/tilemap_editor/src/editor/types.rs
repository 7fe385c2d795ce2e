//! 资源（Resource）与组件（Component）的集中定义。
//!
//! 说明：地图/历史/视口三份核心状态直接使用 `tilemap_core` 的类型作为资源，
//! 这里只放前端自己的数据。

mod camera;
mod presets;
mod session;
mod settings;
mod ui;

pub use camera::WorldCamera;
pub use presets::{PresetState, TileImages};
pub use session::{
    CurrentMap, EditSession, FrameInput, GridOverlay, MapNameInput, MapRevision, Notices,
    PendingAction,
};
pub use settings::{EditorSettings, SETTINGS_FILE};
pub use ui::{
    ActionButton, ActionKind, ConfirmButton, ConfirmLabel, ConfirmRow, MapCycleButton,
    MapNameField, MapNameLabel, MinimapMapRect, MinimapViewRect, NoticesText, PaletteRoot,
    PaletteTileButton, PolicyLabel, PolicyToggleButton, PreferenceButton, PreferenceLabel,
    PresetCycleButton, PresetLabel, QuickButton, QuickKind, StatusText, TileLayer, TileSprite,
};
