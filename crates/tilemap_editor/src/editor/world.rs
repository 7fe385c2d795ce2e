//! 世界（World）侧逻辑：相机、输入采集、编辑、地图渲染、快捷键。
//!
//! 关键点：
//! - 画布坐标原点在窗口左上角、y 向下，与 `Window::cursor_position` 一致，
//!   因此指针位置可以直接交给核心的视口换算。
//! - 地图数据只经由 `EditController` 修改；每次修改递增 `MapRevision`，渲染据此重建。

mod camera;
mod canvas;
mod edit;
mod input;
mod map_io;
mod render;
mod shortcuts;

pub use camera::{setup_world, sync_canvas_size};
pub use canvas::draw_canvas_helpers;
pub use edit::apply_frame_input;
pub use input::collect_frame_input;
pub use map_io::{crop_map, export_map, import_map, load_map, new_map, save_map, wipe_map};
pub use render::sync_tile_sprites;
pub use shortcuts::editor_shortcuts;
