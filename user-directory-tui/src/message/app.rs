//! 应用主消息枚举

use user_directory_core::{LoadError, UserRecord};

use super::ContentMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 从详情返回列表
    GoBack,

    /// 后台加载完成
    UsersLoaded(Result<Vec<UserRecord>, LoadError>),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
