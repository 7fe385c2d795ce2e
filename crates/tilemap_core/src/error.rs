//! 核心错误类型。
//!
//! 这里没有致命错误：所有情况都退化为“操作被跳过、状态不变”，由前端决定是否提示用户。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// 坐标不在当前地图范围内。
    #[error("cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfRange {
        x: i32,
        y: i32,
        columns: u32,
        rows: u32,
    },

    /// 地图文件损坏（长度/头部与声明的尺寸不符等）。
    #[error("corrupt map data: {reason}")]
    CorruptData { reason: String },

    /// 可用的 preset/tile 多于界面能显示的数量（非致命，只截断）。
    #[error("{what}: {available} available, only {capacity} can be shown")]
    CapacityExceeded {
        what: &'static str,
        available: usize,
        capacity: usize,
    },

    /// 撤销/重做栈为空。
    #[error("nothing to {0}")]
    HistoryEmpty(&'static str),

    #[error("setting '{name}' must be within {min}..={max}, got {value}")]
    PreferenceOutOfBounds {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// 缩小地图会丢弃非空格子（仅在 `ResizePolicy::RejectIfOccupied` 下返回）。
    #[error("{count} tiles lie outside the requested {columns}x{rows} grid")]
    TilesOutsideBounds { count: usize, columns: u32, rows: u32 },

    #[error("invalid map name '{0}'")]
    InvalidMapName(String),

    #[error("preset '{0}' not found")]
    PresetNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
