use bevy::prelude::*;

use crate::editor::types::{EditSession, FrameInput, PresetState};

/// 把本帧输入交给控制器；地图或视口变化时递增渲染计数。
pub fn apply_frame_input(
    frame: Res<FrameInput>,
    presets: Res<PresetState>,
    mut session: EditSession,
) {
    let selected = presets.selected_tile();
    let report = session.controller().process_frame(&frame.0, selected);
    if report.grid_changed {
        session.revision.bump_grid();
    }
    if report.viewport_changed {
        session.revision.bump_view();
    }
}
