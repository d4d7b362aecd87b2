//! 视图模式定义

/// 两个互斥的显示区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// 用户列表
    #[default]
    List,
    /// 某个用户的详情
    Detail { id: u64 },
}

impl ViewMode {
    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail(self) -> bool {
        matches!(self, ViewMode::Detail { .. })
    }
}
