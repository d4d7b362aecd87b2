//! 内容面板消息
//!
//! 处理用户列表中的操作

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开光标所在的用户
    Confirm,
    /// 打开第 n 行的用户（鼠标点击）
    Activate(usize),
}
