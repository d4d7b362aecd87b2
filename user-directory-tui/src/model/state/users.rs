//! 用户页面状态

use std::sync::Arc;

use user_directory_core::UserRecord;

/// 用户集合的加载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// 请求尚未返回
    #[default]
    Loading,
    /// 已加载（可能为空）
    Loaded,
    /// 加载失败，进程生命周期内不会再变化
    Failed,
}

/// 用户页面状态
#[derive(Debug, Default)]
pub struct UsersState {
    /// 用户集合，列表与详情共用同一份
    pub records: Arc<[UserRecord]>,
    /// 加载状态
    pub load: LoadState,
    /// 列表光标位置
    pub cursor: usize,
    /// 当前选中用户的 id，设置后不会被清除
    pub selected_id: Option<u64>,
}

impl UsersState {
    /// 设置用户列表
    pub fn set_users(&mut self, users: Vec<UserRecord>) {
        self.records = users.into();
        self.load = LoadState::Loaded;
        self.cursor = 0;
    }

    /// 标记加载失败，清空集合
    pub fn set_failed(&mut self) {
        self.records = Arc::from(Vec::new());
        self.load = LoadState::Failed;
        self.cursor = 0;
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.records.is_empty() && self.cursor < self.records.len() - 1 {
            self.cursor += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.cursor = self.records.len() - 1;
        }
    }

    /// 选中第 `index` 行的用户，返回其 id
    pub fn select_index(&mut self, index: usize) -> Option<u64> {
        let id = self.records.get(index)?.id;
        self.cursor = index;
        self.selected_id = Some(id);
        Some(id)
    }

    /// 按 id 查找用户
    pub fn find(&self, id: u64) -> Option<&UserRecord> {
        self.records.iter().find(|user| user.id == id)
    }

    /// 该用户是否为当前选中用户
    pub fn is_selected(&self, user: &UserRecord) -> bool {
        self.selected_id == Some(user.id)
    }
}
