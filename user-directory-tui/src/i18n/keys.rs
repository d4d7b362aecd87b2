//! 翻译键定义
//!
//! 文本归属于它出现的 UI 组件；跨组件复用的归 `common`。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 用户列表 / 详情页面文本
    pub users: UsersTexts,
    /// 状态栏快捷键提示
    pub hints: HintTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
}

/// 用户页面文本
pub struct UsersTexts {
    pub list_title: &'static str,
    pub detail_title: &'static str,
    pub no_users: &'static str,
    pub load_failed: &'static str,
    // 详情字段标签
    pub email: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub address: &'static str,
    pub company: &'static str,
    pub back_to_list: &'static str,
}

/// 快捷键提示（按键名称 + 动作词）
pub struct HintTexts {
    pub move_cursor: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
}
