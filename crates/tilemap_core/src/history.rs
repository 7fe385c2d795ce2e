//! 撤销/重做栈。
//!
//! 每条记录是 “坐标 + 要写回去的 tile”。两个栈都有容量上限，溢出时丢弃最旧的记录。
//! 历史是线性的：任何新的直接编辑都会清空重做栈（由 `EditController` 调用 [`HistoryStack::clear_redo`]）。

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::{GridStore, TileIndex};

/// 每个栈最多保留的记录数。
pub const MAX_TILE_TRACKING: usize = 500;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryRecord {
    pub x: i32,
    pub y: i32,
    /// 撤销（或重做）时要写回该格子的值。
    pub tile: TileIndex,
}

#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
#[derive(Clone, Debug)]
pub struct HistoryStack {
    undo: VecDeque<HistoryRecord>,
    redo: VecDeque<HistoryRecord>,
    capacity: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::with_capacity(MAX_TILE_TRACKING)
    }
}

fn push_bounded(stack: &mut VecDeque<HistoryRecord>, record: HistoryRecord, capacity: usize) {
    stack.push_back(record);
    while stack.len() > capacity {
        stack.pop_front();
    }
}

impl HistoryStack {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo: VecDeque::with_capacity(capacity),
            redo: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// 撤销栈（从旧到新）。
    pub fn undo_records(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.undo.iter()
    }

    /// 记录一次编辑前的旧值。
    pub fn record_undo(&mut self, x: i32, y: i32, previous: TileIndex) {
        push_bounded(
            &mut self.undo,
            HistoryRecord {
                x,
                y,
                tile: previous,
            },
            self.capacity,
        );
    }

    /// 弹出最近一条撤销记录，并把该格子当前值压入重做栈。
    ///
    /// 指向当前地图范围外的记录（例如地图缩小后）会被直接丢弃，继续取下一条。
    /// 栈空时返回 `None`。写回地图由调用方完成。
    pub fn undo(&mut self, grid: &GridStore) -> Option<HistoryRecord> {
        while let Some(record) = self.undo.pop_back() {
            match grid.get(record.x, record.y) {
                Ok(current) => {
                    push_bounded(
                        &mut self.redo,
                        HistoryRecord {
                            tile: current,
                            ..record
                        },
                        self.capacity,
                    );
                    return Some(record);
                }
                Err(err) => {
                    log::debug!("dropping stale undo record: {err}");
                }
            }
        }
        None
    }

    /// 与 [`HistoryStack::undo`] 对称：弹出重做记录，并把当前值压回撤销栈。
    pub fn redo(&mut self, grid: &GridStore) -> Option<HistoryRecord> {
        while let Some(record) = self.redo.pop_back() {
            match grid.get(record.x, record.y) {
                Ok(current) => {
                    push_bounded(
                        &mut self.undo,
                        HistoryRecord {
                            tile: current,
                            ..record
                        },
                        self.capacity,
                    );
                    return Some(record);
                }
                Err(err) => {
                    log::debug!("dropping stale redo record: {err}");
                }
            }
        }
        None
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
