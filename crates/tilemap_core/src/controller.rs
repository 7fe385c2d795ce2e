//! 编辑控制器：指针输入 → 格子坐标 → 边界检查 → 写入地图 + 记录历史。
//!
//! 控制器本身不拥有数据，只持有对 [`GridStore`] / [`HistoryStack`] / [`ViewportTransform`]
//! 的显式借用。前端可以把三者作为独立资源保存，每帧临时组装一个控制器。

use crate::error::{CoreError, Result};
use crate::grid::{GridStore, ResizePolicy, TileIndex, EMPTY_TILE};
use crate::history::{HistoryRecord, HistoryStack};
use crate::input::{EditorKey, InputSnapshot};
use crate::preferences::{GridLimits, Preference, PreferenceChange};
use crate::viewport::{ScrollDirection, ViewportTransform, VisibleRange};

/// 一帧处理后的变化情况（前端据此决定是否重建渲染）。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub grid_changed: bool,
    pub viewport_changed: bool,
}

impl FrameReport {
    pub fn any(&self) -> bool {
        self.grid_changed || self.viewport_changed
    }
}

pub struct EditController<'a> {
    grid: &'a mut GridStore,
    history: &'a mut HistoryStack,
    viewport: &'a mut ViewportTransform,
    limits: GridLimits,
    resize_policy: ResizePolicy,
}

impl<'a> EditController<'a> {
    pub fn new(
        grid: &'a mut GridStore,
        history: &'a mut HistoryStack,
        viewport: &'a mut ViewportTransform,
    ) -> Self {
        Self {
            grid,
            history,
            viewport,
            limits: GridLimits::default(),
            resize_policy: ResizePolicy::default(),
        }
    }

    pub fn with_limits(mut self, limits: GridLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    pub fn grid(&self) -> &GridStore {
        &*self.grid
    }

    pub fn history(&self) -> &HistoryStack {
        &*self.history
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &*self.viewport
    }

    pub fn get(&self, x: i32, y: i32) -> Result<TileIndex> {
        self.grid.get(x, y)
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.viewport
            .visible_range(self.grid.columns(), self.grid.rows())
    }

    /// 屏幕坐标 → 格子坐标；指针在画布外（侧边面板）时返回 `None`。
    fn canvas_cell(&self, screen_x: f32, screen_y: f32) -> Option<(i32, i32)> {
        if !self.viewport.in_canvas(screen_x, screen_y) {
            return None;
        }
        Some(self.viewport.screen_to_grid(screen_x, screen_y))
    }

    /// 在指针位置放置 tile。返回是否真的修改了地图。
    pub fn try_place(&mut self, screen_x: f32, screen_y: f32, tile: TileIndex) -> bool {
        let Some((x, y)) = self.canvas_cell(screen_x, screen_y) else {
            return false;
        };
        self.place_cell(x, y, tile)
    }

    /// 删除指针位置的 tile。
    pub fn try_remove(&mut self, screen_x: f32, screen_y: f32) -> bool {
        let Some((x, y)) = self.canvas_cell(screen_x, screen_y) else {
            return false;
        };
        self.remove_cell(x, y)
    }

    /// 按格子坐标放置；越界或格子已是该值时不记录。
    pub fn place_cell(&mut self, x: i32, y: i32, tile: TileIndex) -> bool {
        if tile == EMPTY_TILE {
            return self.remove_cell(x, y);
        }
        self.write_cell(x, y, tile)
    }

    pub fn remove_cell(&mut self, x: i32, y: i32) -> bool {
        self.write_cell(x, y, EMPTY_TILE)
    }

    fn write_cell(&mut self, x: i32, y: i32, tile: TileIndex) -> bool {
        let Ok(previous) = self.grid.get(x, y) else {
            return false;
        };
        if previous == tile {
            return false;
        }
        if self.grid.set(x, y, tile).is_err() {
            return false;
        }
        self.history.record_undo(x, y, previous);
        self.history.clear_redo();
        true
    }

    pub fn undo(&mut self) -> Result<HistoryRecord> {
        let record = self
            .history
            .undo(&*self.grid)
            .ok_or(CoreError::HistoryEmpty("undo"))?;
        self.grid.set(record.x, record.y, record.tile)?;
        Ok(record)
    }

    pub fn redo(&mut self) -> Result<HistoryRecord> {
        let record = self
            .history
            .redo(&*self.grid)
            .ok_or(CoreError::HistoryEmpty("redo"))?;
        self.grid.set(record.x, record.y, record.tile)?;
        Ok(record)
    }

    fn clamp_scroll_if_bounded(&mut self) {
        if self.viewport.scroll_settings().bounded {
            self.viewport
                .clamp_scroll(self.grid.columns(), self.grid.rows());
        }
    }

    pub fn zoom_in(&mut self) -> bool {
        let changed = self.viewport.zoom_in();
        self.clamp_scroll_if_bounded();
        changed
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.viewport.zoom_out();
        self.clamp_scroll_if_bounded();
        changed
    }

    pub fn scroll(&mut self, direction: ScrollDirection, speed: f32) {
        let (columns, rows) = (self.grid.columns(), self.grid.rows());
        self.viewport.apply_scroll(direction, speed, columns, rows);
    }

    /// 处理一帧输入：按键事件 → 滚动 → 放置/删除。
    pub fn process_frame(
        &mut self,
        input: &InputSnapshot,
        selected: Option<TileIndex>,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        let scroll_before = self.viewport.scroll();

        for key in &input.events {
            match key {
                EditorKey::Undo => match self.undo() {
                    Ok(_) => report.grid_changed = true,
                    Err(err) => log::debug!("{err}"),
                },
                EditorKey::Redo => match self.redo() {
                    Ok(_) => report.grid_changed = true,
                    Err(err) => log::debug!("{err}"),
                },
                EditorKey::ZoomIn => report.viewport_changed |= self.zoom_in(),
                EditorKey::ZoomOut => report.viewport_changed |= self.zoom_out(),
            }
        }

        let settings = self.viewport.scroll_settings();
        let speed = if input.held.fast {
            settings.fast_speed
        } else {
            settings.base_speed
        };
        let held = input.held;
        for (active, direction) in [
            (held.left, ScrollDirection::Left),
            (held.right, ScrollDirection::Right),
            (held.up, ScrollDirection::Up),
            (held.down, ScrollDirection::Down),
        ] {
            if active {
                self.scroll(direction, speed);
            }
        }
        report.viewport_changed |= self.viewport.scroll() != scroll_before;

        if let Some((px, py)) = input.pointer {
            if input.primary_down {
                if let Some(tile) = selected {
                    report.grid_changed |= self.try_place(px, py, tile);
                }
            } else if input.secondary_down {
                report.grid_changed |= self.try_remove(px, py);
            }
        }

        report
    }

    /// 修改行数（按当前 resize 策略）。
    pub fn set_rows(&mut self, rows: u32) -> Result<PreferenceChange> {
        self.limits.check(Preference::Rows, rows)?;
        let old = self.grid.rows();
        let columns = self.grid.columns();
        let report = self
            .grid
            .resize_with_policy(rows, columns, self.resize_policy)?;
        self.clamp_scroll_if_bounded();
        Ok(PreferenceChange {
            preference: Preference::Rows,
            old,
            new: rows,
            discarded: report.discarded,
        })
    }

    pub fn set_columns(&mut self, columns: u32) -> Result<PreferenceChange> {
        self.limits.check(Preference::Columns, columns)?;
        let old = self.grid.columns();
        let rows = self.grid.rows();
        let report = self
            .grid
            .resize_with_policy(rows, columns, self.resize_policy)?;
        self.clamp_scroll_if_bounded();
        Ok(PreferenceChange {
            preference: Preference::Columns,
            old,
            new: columns,
            discarded: report.discarded,
        })
    }

    /// 修改格子尺寸（宽高都必须在范围内，否则都不改）。
    pub fn set_cell_size(&mut self, cell_width: u32, cell_height: u32) -> Result<()> {
        self.limits.check(Preference::CellWidth, cell_width)?;
        self.limits.check(Preference::CellHeight, cell_height)?;
        self.viewport.set_cell_size(cell_width, cell_height);
        self.clamp_scroll_if_bounded();
        Ok(())
    }

    pub fn preference_value(&self, pref: Preference) -> u32 {
        let (cell_width, cell_height) = self.viewport.cell_size();
        match pref {
            Preference::Rows => self.grid.rows(),
            Preference::Columns => self.grid.columns(),
            Preference::CellWidth => cell_width,
            Preference::CellHeight => cell_height,
        }
    }

    pub fn apply_preference(&mut self, pref: Preference, value: u32) -> Result<PreferenceChange> {
        match pref {
            Preference::Rows => self.set_rows(value),
            Preference::Columns => self.set_columns(value),
            Preference::CellWidth | Preference::CellHeight => {
                let old = self.preference_value(pref);
                let (w, h) = self.viewport.cell_size();
                if pref == Preference::CellWidth {
                    self.set_cell_size(value, h)?;
                } else {
                    self.set_cell_size(w, value)?;
                }
                Ok(PreferenceChange {
                    preference: pref,
                    old,
                    new: value,
                    discarded: 0,
                })
            }
        }
    }

    /// 裁剪到非空内容（至少保留最小行列数）。历史记录保留，越界的记录在撤销时丢弃。
    pub fn crop(&mut self) -> (u32, u32) {
        let dims = self
            .grid
            .crop(self.limits.min_rows(), self.limits.min_columns());
        self.clamp_scroll_if_bounded();
        dims
    }

    pub fn wipe(&mut self) {
        self.grid.wipe();
    }

    /// 新建（或重启）地图：全空、清空历史、视口回到原点。
    pub fn new_map(&mut self, rows: u32, columns: u32, cell_width: u32, cell_height: u32) {
        *self.grid = GridStore::new(rows, columns);
        self.history.clear();
        self.viewport.set_cell_size(cell_width, cell_height);
        self.viewport.reset();
    }

    /// 载入地图：整体替换地图与格子尺寸，视口回到原点，历史清空。
    pub fn replace_map(&mut self, grid: GridStore, cell_width: u32, cell_height: u32) {
        *self.grid = grid;
        self.history.clear();
        self.viewport.set_cell_size(cell_width, cell_height);
        self.viewport.reset();
    }
}
