//! 视口：滚动偏移 + 缩放，以及屏幕像素 ↔ 格子坐标的换算。
//!
//! 坐标约定（屏幕原点在画布左上角，y 向下）：
//!
//! ```text
//! screen_x = (grid_x * cell_width + scroll_x) * scale
//! grid_x   = floor((screen_x - scroll_x * scale) / (cell_width * scale))
//! ```
//!
//! 滚动值是“缩放前”的像素偏移，可以为负。

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.4,
            max: 1.8,
            step: 0.2,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSettings {
    pub base_speed: f32,
    /// 按住加速键时的速度。
    pub fast_speed: f32,
    /// 是否限制滚动，避免把地图整个移出视口。
    pub bounded: bool,
    pub min_visible_columns: u32,
    pub min_visible_rows: u32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            fast_speed: 15.0,
            bounded: true,
            min_visible_columns: 1,
            min_visible_rows: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
    Up,
    Down,
}

/// 与视口相交的格子范围（半开区间，已裁剪到地图范围内）。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleRange {
    pub start_col: u32,
    pub stop_col: u32,
    pub start_row: u32,
    pub stop_row: u32,
}

impl VisibleRange {
    pub fn columns(&self) -> Range<u32> {
        self.start_col..self.stop_col
    }

    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.stop_row
    }

    pub fn is_empty(&self) -> bool {
        self.start_col >= self.stop_col || self.start_row >= self.stop_row
    }

    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.stop_col - self.start_col) as usize) * ((self.stop_row - self.start_row) as usize)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.columns().contains(&x) && self.rows().contains(&y)
    }

    /// 是否完整覆盖另一个范围（空范围总是被覆盖）。
    pub fn covers(&self, other: &VisibleRange) -> bool {
        other.is_empty()
            || (self.start_col <= other.start_col
                && other.stop_col <= self.stop_col
                && self.start_row <= other.start_row
                && other.stop_row <= self.stop_row)
    }

    /// 四周各扩 `margin` 格，仍裁剪在地图范围内。
    pub fn expanded(&self, margin: u32, columns: u32, rows: u32) -> VisibleRange {
        if self.is_empty() {
            return *self;
        }
        VisibleRange {
            start_col: self.start_col.saturating_sub(margin),
            stop_col: self.stop_col.saturating_add(margin).min(columns),
            start_row: self.start_row.saturating_sub(margin),
            stop_row: self.stop_row.saturating_add(margin).min(rows),
        }
    }
}

#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportTransform {
    scroll_x: f32,
    scroll_y: f32,
    scale: f32,
    cell_width: u32,
    cell_height: u32,
    canvas_width: f32,
    canvas_height: f32,
    zoom: ZoomLimits,
    scrolling: ScrollSettings,
}

impl ViewportTransform {
    pub fn new(cell_width: u32, cell_height: u32, canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            scale: 1.0,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            canvas_width: canvas_width.max(0.0),
            canvas_height: canvas_height.max(0.0),
            zoom: ZoomLimits::default(),
            scrolling: ScrollSettings::default(),
        }
    }

    pub fn with_zoom_limits(mut self, zoom: ZoomLimits) -> Self {
        self.zoom = zoom;
        self.scale = self.snap_scale(self.scale);
        self
    }

    pub fn with_scroll_settings(mut self, scrolling: ScrollSettings) -> Self {
        self.scrolling = scrolling;
        self
    }

    pub fn scroll(&self) -> (f32, f32) {
        (self.scroll_x, self.scroll_y)
    }

    pub fn set_scroll(&mut self, scroll_x: f32, scroll_y: f32) {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom
    }

    pub fn scroll_settings(&self) -> ScrollSettings {
        self.scrolling
    }

    /// 未缩放的格子尺寸。
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    pub fn set_cell_size(&mut self, cell_width: u32, cell_height: u32) {
        self.cell_width = cell_width.max(1);
        self.cell_height = cell_height.max(1);
    }

    /// 当前缩放下格子在屏幕上的尺寸。
    pub fn scaled_cell_size(&self) -> (f32, f32) {
        (
            self.cell_width as f32 * self.scale,
            self.cell_height as f32 * self.scale,
        )
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width, self.canvas_height)
    }

    /// 画布尺寸变化（窗口 resize）。
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_width = width.max(0.0);
        self.canvas_height = height.max(0.0);
    }

    /// 屏幕坐标是否落在画布区域内（画布外是侧边面板）。
    pub fn in_canvas(&self, px: f32, py: f32) -> bool {
        px >= 0.0 && py >= 0.0 && px < self.canvas_width && py < self.canvas_height
    }

    /// 回到原点、缩放 1.0。
    pub fn reset(&mut self) {
        self.scroll_x = 0.0;
        self.scroll_y = 0.0;
        self.scale = self.snap_scale(1.0);
    }

    pub fn screen_to_grid(&self, px: f32, py: f32) -> (i32, i32) {
        let s = self.scale as f64;
        let gx = (px as f64 - self.scroll_x as f64 * s) / (self.cell_width as f64 * s);
        let gy = (py as f64 - self.scroll_y as f64 * s) / (self.cell_height as f64 * s);
        (gx.floor() as i32, gy.floor() as i32)
    }

    /// 格子左上角在屏幕上的位置。
    pub fn grid_to_screen(&self, gx: i32, gy: i32) -> (f32, f32) {
        let s = self.scale as f64;
        let px = (gx as f64 * self.cell_width as f64 + self.scroll_x as f64) * s;
        let py = (gy as f64 * self.cell_height as f64 + self.scroll_y as f64) * s;
        (px as f32, py as f32)
    }

    /// 与画布相交的格子范围，裁剪到 `[0, columns)` / `[0, rows)`。
    pub fn visible_range(&self, columns: u32, rows: u32) -> VisibleRange {
        let s = self.scale as f64;
        let (start_col, stop_col) = visible_span(
            -(self.scroll_x as f64),
            self.canvas_width as f64 / s - self.scroll_x as f64,
            self.cell_width as f64,
            columns,
        );
        let (start_row, stop_row) = visible_span(
            -(self.scroll_y as f64),
            self.canvas_height as f64 / s - self.scroll_y as f64,
            self.cell_height as f64,
            rows,
        );
        VisibleRange {
            start_col,
            stop_col,
            start_row,
            stop_row,
        }
    }

    /// 把任意缩放值吸附到 `[min, max]` 内、按 `step` 分档的值。
    pub fn snap_scale(&self, scale: f32) -> f32 {
        let ZoomLimits { min, max, step } = self.zoom;
        let clamped = scale.clamp(min, max.max(min));
        if step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - min) / step).round();
        let snapped = ((min + steps * step) * 1000.0).round() / 1000.0;
        snapped.clamp(min, max.max(min))
    }

    /// 设置缩放并保持画布中心点不动。返回缩放是否真的变化。
    pub fn set_scale(&mut self, scale: f32) -> bool {
        let next = self.snap_scale(scale);
        if (next - self.scale).abs() < 1e-6 {
            return false;
        }

        let half_w = self.canvas_width as f64 * 0.5;
        let half_h = self.canvas_height as f64 * 0.5;
        let old = self.scale as f64;
        let new = next as f64;
        // 画布中心对应的“未缩放”世界坐标
        let center_x = half_w / old - self.scroll_x as f64;
        let center_y = half_h / old - self.scroll_y as f64;

        self.scroll_x = (half_w / new - center_x) as f32;
        self.scroll_y = (half_h / new - center_y) as f32;
        self.scale = next;
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_scale(self.scale + self.zoom.step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_scale(self.scale - self.zoom.step)
    }

    /// 按方向累加滚动；开启 `bounded` 时随后做边界限制。
    pub fn apply_scroll(&mut self, direction: ScrollDirection, speed: f32, columns: u32, rows: u32) {
        match direction {
            ScrollDirection::Left => self.scroll_x += speed,
            ScrollDirection::Right => self.scroll_x -= speed,
            ScrollDirection::Up => self.scroll_y += speed,
            ScrollDirection::Down => self.scroll_y -= speed,
        }
        if self.scrolling.bounded {
            self.clamp_scroll(columns, rows);
        }
    }

    /// 限制滚动：至少保留 `min_visible_columns` 列 / `min_visible_rows` 行在画布内。
    pub fn clamp_scroll(&mut self, columns: u32, rows: u32) {
        let s = self.scale as f64;
        if let Some(v) = clamp_axis(
            self.scroll_x as f64,
            self.cell_width as f64,
            columns,
            self.scrolling.min_visible_columns,
            self.canvas_width as f64 / s,
        ) {
            self.scroll_x = v as f32;
        }
        if let Some(v) = clamp_axis(
            self.scroll_y as f64,
            self.cell_height as f64,
            rows,
            self.scrolling.min_visible_rows,
            self.canvas_height as f64 / s,
        ) {
            self.scroll_y = v as f32;
        }
    }
}

fn visible_span(left: f64, right: f64, cell: f64, count: u32) -> (u32, u32) {
    let start = (left / cell).floor().max(0.0).min(count as f64) as u32;
    let stop = (right / cell).ceil().max(0.0).min(count as f64) as u32;
    if stop <= start {
        return (start, start);
    }
    (start, stop)
}

fn clamp_axis(scroll: f64, cell: f64, count: u32, min_visible: u32, view_len: f64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let keep = min_visible.clamp(1, count) as f64;
    let lo = (keep - count as f64) * cell;
    let hi = view_len - keep * cell;
    if lo > hi {
        return None;
    }
    Some(scroll.clamp(lo, hi))
}
