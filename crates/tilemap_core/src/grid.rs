//! 地图格子存储（按行优先扁平存储的二维 tile index 数组）。
//!
//! 约定：
//! - `-1`（[`EMPTY_TILE`]）表示空格子。
//! - 所有读写都做边界检查，越界返回 [`CoreError::OutOfRange`]，不会 panic。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// 格子里存放的 tile 编号（对应 preset 中的图片），`-1` 为空。
pub type TileIndex = i32;

pub const EMPTY_TILE: TileIndex = -1;

/// 缩小地图时的处理策略。
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizePolicy {
    /// 直接截断，新边界外的格子被丢弃（破坏性，丢弃数量会在 [`ResizeReport`] 中报告）。
    #[default]
    Truncate,
    /// 新边界外还有非空格子时拒绝修改。
    RejectIfOccupied,
}

/// 一次 resize 的结果。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeReport {
    pub rows: u32,
    pub columns: u32,
    /// 被截断丢弃的非空格子数量。
    pub discarded: usize,
}

impl ResizeReport {
    pub fn is_destructive(&self) -> bool {
        self.discarded > 0
    }
}

#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridStore {
    rows: u32,
    columns: u32,
    cells: Vec<TileIndex>,
}

impl GridStore {
    /// 创建一张全空地图。
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            cells: vec![EMPTY_TILE; (rows as usize) * (columns as usize)],
        }
    }

    /// 由已有数据构建；长度必须等于 `rows * columns`。
    pub fn from_cells(rows: u32, columns: u32, cells: Vec<TileIndex>) -> Result<Self> {
        let want = (rows as usize) * (columns as usize);
        if cells.len() != want {
            return Err(CoreError::CorruptData {
                reason: format!(
                    "{rows}x{columns} grid needs {want} cells, found {}",
                    cells.len()
                ),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// 行优先的全部格子。
    pub fn cells(&self) -> &[TileIndex] {
        &self.cells
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.columns && (y as u32) < self.rows
    }

    fn idx(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(CoreError::OutOfRange {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok((y as usize) * (self.columns as usize) + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<TileIndex> {
        let idx = self.idx(x, y)?;
        Ok(self.cells[idx])
    }

    /// 带边界检查的写入。是否跳过“写入相同值”由调用方决定。
    pub fn set(&mut self, x: i32, y: i32, tile: TileIndex) -> Result<()> {
        let idx = self.idx(x, y)?;
        self.cells[idx] = tile;
        Ok(())
    }

    /// 某一行（渲染时按行扫描可见范围）。
    pub fn row(&self, y: u32) -> Option<&[TileIndex]> {
        if y >= self.rows {
            return None;
        }
        let start = (y as usize) * (self.columns as usize);
        Some(&self.cells[start..start + self.columns as usize])
    }

    /// 遍历所有非空格子：`(x, y, tile)`。
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32, TileIndex)> + '_ {
        let columns = self.columns.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| **t != EMPTY_TILE)
            .map(move |(i, t)| ((i % columns) as u32, (i / columns) as u32, *t))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|t| *t == EMPTY_TILE)
    }

    /// 若缩小到 `rows x columns`，会有多少非空格子落在边界外。
    pub fn count_outside(&self, rows: u32, columns: u32) -> usize {
        self.occupied()
            .filter(|(x, y, _)| *x >= columns || *y >= rows)
            .count()
    }

    /// 调整尺寸：保留重叠区域，新露出的格子为空，缩小时截断。
    pub fn resize(&mut self, rows: u32, columns: u32) -> ResizeReport {
        let discarded = self.count_outside(rows, columns);
        if rows == self.rows && columns == self.columns {
            return ResizeReport {
                rows,
                columns,
                discarded,
            };
        }

        let mut cells = vec![EMPTY_TILE; (rows as usize) * (columns as usize)];
        let copy_w = self.columns.min(columns) as usize;
        let copy_h = self.rows.min(rows) as usize;
        for y in 0..copy_h {
            let src = y * self.columns as usize;
            let dst = y * columns as usize;
            cells[dst..dst + copy_w].copy_from_slice(&self.cells[src..src + copy_w]);
        }

        if discarded > 0 {
            log::warn!(
                "destructive resize {}x{} -> {}x{}: {} tiles discarded",
                self.columns,
                self.rows,
                columns,
                rows,
                discarded
            );
        }

        self.rows = rows;
        self.columns = columns;
        self.cells = cells;
        ResizeReport {
            rows,
            columns,
            discarded,
        }
    }

    /// 按策略调整尺寸；`RejectIfOccupied` 下若会丢数据则不做任何修改。
    pub fn resize_with_policy(
        &mut self,
        rows: u32,
        columns: u32,
        policy: ResizePolicy,
    ) -> Result<ResizeReport> {
        if policy == ResizePolicy::RejectIfOccupied {
            let count = self.count_outside(rows, columns);
            if count > 0 {
                return Err(CoreError::TilesOutsideBounds {
                    count,
                    columns,
                    rows,
                });
            }
        }
        Ok(self.resize(rows, columns))
    }

    /// 非空内容占据的最小范围 `(rows, columns)`（始终从原点算起）。
    ///
    /// 行从最后一行向上扫描到第一个非空行；列取所有非空格子的最大列号 + 1。
    pub fn occupied_extent(&self) -> (u32, u32) {
        let mut rows_to_keep = self.rows;
        for y in (0..self.rows).rev() {
            let empty = self
                .row(y)
                .map(|r| r.iter().all(|t| *t == EMPTY_TILE))
                .unwrap_or(true);
            if !empty {
                break;
            }
            rows_to_keep -= 1;
        }

        let cols_to_keep = self
            .occupied()
            .map(|(x, _, _)| x + 1)
            .max()
            .unwrap_or(0);

        (rows_to_keep, cols_to_keep)
    }

    /// 裁剪到非空内容的包围盒，并至少保留 `min_rows x min_columns`。
    ///
    /// 裁剪只会缩小：当前尺寸本来就小于下限时保持不变。返回新的 `(rows, columns)`。
    pub fn crop(&mut self, min_rows: u32, min_columns: u32) -> (u32, u32) {
        let (rows, columns) = self.occupied_extent();
        let rows = rows.max(min_rows).min(self.rows);
        let columns = columns.max(min_columns).min(self.columns);
        self.resize(rows, columns);
        (rows, columns)
    }

    /// 清空所有格子，尺寸不变。
    pub fn wipe(&mut self) {
        self.cells.fill(EMPTY_TILE);
    }
}
