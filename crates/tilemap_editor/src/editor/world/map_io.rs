//! 地图生命周期：新建、保存、读取、导入/导出、清空、裁剪。
//!
//! 失败时地图保持不变，错误写入提示面板。

use tilemap_format::{read_map_file, write_map_file, MapFile, MAP_EXTENSION};

use crate::editor::persistence::{load_named_map, save_named_map, snapshot_map};
use crate::editor::types::EditSession;

fn apply_loaded(session: &mut EditSession, map: MapFile, source: &str) {
    let MapFile {
        cell_width,
        cell_height,
        grid,
    } = map;
    let (rows, columns) = (grid.rows(), grid.columns());
    session
        .controller()
        .replace_map(grid, cell_width, cell_height);
    session.revision.bump_all();
    session.notice(format!("loaded {source} ({columns}x{rows})"));
}

/// 按配置中的默认尺寸新建地图。
pub fn new_map(session: &mut EditSession) {
    let s = &session.settings;
    let (rows, columns, cell_width, cell_height) = (s.rows, s.columns, s.cell_width, s.cell_height);
    session
        .controller()
        .new_map(rows, columns, cell_width, cell_height);
    session.revision.bump_all();
    session.notice(format!("new {columns}x{rows} map"));
}

pub fn save_map(session: &mut EditSession, name: &str) {
    let map = snapshot_map(&session.grid, session.viewport.cell_size());
    match save_named_map(&session.settings, name, &map) {
        Ok(path) => session.notice(format!("saved map '{name}' to {path}")),
        Err(err) => session.warn(format!("save failed: {err}")),
    }
}

pub fn load_map(session: &mut EditSession, name: &str) {
    match load_named_map(&session.settings, name) {
        Ok(map) => apply_loaded(session, map, &format!("map '{name}'")),
        Err(err) => session.warn(format!("load failed: {err}")),
    }
}

/// 导出到任意路径：`.ron` 为文本格式，其余为二进制。
pub fn export_map(session: &mut EditSession, name: &str) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Map", &[MAP_EXTENSION])
        .add_filter("RON", &["ron"])
        .set_file_name(format!("{name}.{MAP_EXTENSION}"))
        .save_file()
    else {
        return;
    };

    let map = snapshot_map(&session.grid, session.viewport.cell_size());
    match write_map_file(&path, &map) {
        Ok(()) => session.notice(format!("exported map: {}", path.display())),
        Err(err) => session.warn(format!("export failed: {err}")),
    }
}

pub fn import_map(session: &mut EditSession) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Map", &[MAP_EXTENSION, "ron"])
        .pick_file()
    else {
        return;
    };

    match read_map_file(&path) {
        Ok(map) => apply_loaded(session, map, &path.display().to_string()),
        Err(err) => session.warn(format!("import failed: {err}")),
    }
}

pub fn wipe_map(session: &mut EditSession) {
    session.controller().wipe();
    session.revision.bump_grid();
    session.notice("map wiped");
}

pub fn crop_map(session: &mut EditSession) {
    let (rows, columns) = session.controller().crop();
    session.revision.bump_all();
    session.notice(format!("map cropped to {columns}x{rows}"));
}
