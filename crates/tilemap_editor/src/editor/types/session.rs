use std::collections::VecDeque;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use tilemap_core::{
    CoreError, EditController, GridStore, HistoryStack, InputSnapshot, ViewportTransform,
};
use tilemap_format::validate_map_name;

use super::{ActionKind, EditorSettings};

/// 底部面板最多保留的提示条数。
const MAX_NOTICES: usize = 6;
/// 地图名输入上限（字符数）。
pub const MAX_MAP_NAME_LEN: usize = 32;

/// 渲染缓存的失效计数：地图内容或视口变化时递增。
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct MapRevision {
    pub grid: u64,
    pub view: u64,
}

impl MapRevision {
    pub fn bump_grid(&mut self) {
        self.grid = self.grid.wrapping_add(1);
    }

    pub fn bump_view(&mut self) {
        self.view = self.view.wrapping_add(1);
    }

    pub fn bump_all(&mut self) {
        self.bump_grid();
        self.bump_view();
    }
}

/// 提示信息（容量截断、载入失败、设置修改结果等），显示在底部面板。
#[derive(Resource, Default)]
pub struct Notices {
    lines: VecDeque<String>,
}

impl Notices {
    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == MAX_NOTICES {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// 当前地图名（保存/读取用）。
#[derive(Resource, Clone, Debug)]
pub struct CurrentMap {
    pub name: String,
}

/// 地图名输入框的编辑状态；Enter 提交，Esc 放弃。
#[derive(Resource, Default, Debug)]
pub struct MapNameInput {
    editing: bool,
    buffer: String,
}

impl MapNameInput {
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 以当前地图名为初始内容开始编辑。
    pub fn begin(&mut self, current: &str) {
        self.editing = true;
        self.buffer = current.to_string();
    }

    pub fn push(&mut self, ch: char) {
        if self.editing && self.buffer.chars().count() < MAX_MAP_NAME_LEN {
            self.buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.editing {
            self.buffer.pop();
        }
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }

    /// 校验并结束编辑；名字不合法时保持编辑状态。
    pub fn commit(&mut self) -> Result<String, CoreError> {
        let name = validate_map_name(&self.buffer)?.to_string();
        self.cancel();
        Ok(name)
    }

    /// 面板上显示的文本（编辑中带光标）。
    pub fn display(&self, current: &str) -> String {
        if self.editing {
            format!("{}|", self.buffer)
        } else {
            current.to_string()
        }
    }
}

/// 等待确认的破坏性操作（新建/清空/裁剪）。
#[derive(Resource, Default, Debug)]
pub struct PendingAction(Option<ActionKind>);

impl PendingAction {
    /// 需要确认的操作先挂起并返回 `None`；其余操作直接返回，并撤销挂起的确认。
    pub fn request(&mut self, kind: ActionKind) -> Option<ActionKind> {
        if kind.confirmation_prompt().is_some() {
            self.0 = Some(kind);
            None
        } else {
            self.0 = None;
            Some(kind)
        }
    }

    pub fn get(&self) -> Option<ActionKind> {
        self.0
    }

    pub fn confirm(&mut self) -> Option<ActionKind> {
        self.0.take()
    }

    pub fn cancel(&mut self) {
        self.0 = None;
    }
}

#[derive(Resource)]
pub struct GridOverlay {
    pub visible: bool,
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// 本帧采集到的输入。
#[derive(Resource, Default)]
pub struct FrameInput(pub InputSnapshot);

/// 编辑所需的全部状态，供需要修改地图的系统共用。
#[derive(SystemParam)]
pub struct EditSession<'w> {
    pub grid: ResMut<'w, GridStore>,
    pub history: ResMut<'w, HistoryStack>,
    pub viewport: ResMut<'w, ViewportTransform>,
    pub settings: Res<'w, EditorSettings>,
    pub revision: ResMut<'w, MapRevision>,
    pub notices: ResMut<'w, Notices>,
}

impl EditSession<'_> {
    /// 按当前配置组装一个控制器。
    pub fn controller(&mut self) -> EditController<'_> {
        EditController::new(&mut self.grid, &mut self.history, &mut self.viewport)
            .with_limits(self.settings.limits.clone())
            .with_resize_policy(self.settings.resize_policy)
    }

    /// 记录一条提示并写日志。
    pub fn notice(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!("{line}");
        self.notices.push(line);
    }

    pub fn warn(&mut self, line: impl Into<String>) {
        let line = line.into();
        warn!("{line}");
        self.notices.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_name_commits_valid_names() {
        let mut input = MapNameInput::default();
        input.begin("level");
        input.backspace();
        input.backspace();
        for ch in "al_2".chars() {
            input.push(ch);
        }
        assert_eq!(input.display("level"), "leval_2|");
        assert_eq!(input.commit().unwrap(), "leval_2");
        assert!(!input.is_editing());
        assert_eq!(input.display("leval_2"), "leval_2");
    }

    #[test]
    fn invalid_map_name_keeps_editing() {
        let mut input = MapNameInput::default();
        input.begin("a");
        input.backspace();
        assert!(matches!(input.commit(), Err(CoreError::InvalidMapName(_))));
        assert!(input.is_editing());

        input.push('.');
        input.push('.');
        assert!(input.commit().is_err());
        assert_eq!(input.buffer(), "..");
    }

    #[test]
    fn map_name_ignores_keys_when_idle_and_caps_length() {
        let mut input = MapNameInput::default();
        input.push('x');
        assert_eq!(input.buffer(), "");

        input.begin("");
        for _ in 0..MAX_MAP_NAME_LEN + 5 {
            input.push('m');
        }
        assert_eq!(input.buffer().len(), MAX_MAP_NAME_LEN);

        input.cancel();
        assert!(!input.is_editing());
        assert_eq!(input.display("level"), "level");
    }

    #[test]
    fn destructive_actions_wait_for_confirmation() {
        let mut pending = PendingAction::default();
        for kind in [ActionKind::NewMap, ActionKind::Wipe, ActionKind::Crop] {
            assert_eq!(pending.request(kind), None);
            assert_eq!(pending.get(), Some(kind));
        }
        assert_eq!(pending.confirm(), Some(ActionKind::Crop));
        assert_eq!(pending.confirm(), None);

        pending.request(ActionKind::Wipe);
        pending.cancel();
        assert_eq!(pending.get(), None);
    }

    #[test]
    fn other_actions_run_at_once_and_drop_pending() {
        let mut pending = PendingAction::default();
        pending.request(ActionKind::NewMap);
        assert_eq!(pending.request(ActionKind::SaveMap), Some(ActionKind::SaveMap));
        assert_eq!(pending.get(), None);
        assert_eq!(pending.request(ActionKind::LoadMap), Some(ActionKind::LoadMap));
    }
}
