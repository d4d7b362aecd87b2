//! 应用主状态结构

use ratatui::layout::Rect;
use user_directory_core::UserRecord;

use super::{UsersState, ViewMode};

/// 应用主状态
#[derive(Debug, Default)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前显示的区域
    pub mode: ViewMode,

    /// 用户页面状态
    pub users: UsersState,

    /// 上一次绘制时的终端区域，用于鼠标点击定位
    pub viewport: Rect,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 详情模式下正在查看的用户
    pub fn current_user(&self) -> Option<&UserRecord> {
        match self.mode {
            ViewMode::Detail { id } => self.users.find(id),
            ViewMode::List => None,
        }
    }
}
