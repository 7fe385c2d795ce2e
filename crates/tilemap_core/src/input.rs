//! 每帧输入快照。前端负责采集（窗口/键盘库），核心只消费。

/// 离散按键事件（每次按下触发一次）。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKey {
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
}

/// 持续按住的滚动键。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// 加速滚动（默认 Shift）。
    pub fast: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// 画布坐标系下的指针位置；不在窗口内时为 `None`。
    pub pointer: Option<(f32, f32)>,
    /// 主键（放置）。
    pub primary_down: bool,
    /// 副键（删除）。
    pub secondary_down: bool,
    pub held: HeldKeys,
    pub events: Vec<EditorKey>,
}

impl InputSnapshot {
    pub fn pointer_at(x: f32, y: f32) -> Self {
        Self {
            pointer: Some((x, y)),
            ..Default::default()
        }
    }
}
