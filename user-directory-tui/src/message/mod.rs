//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Event 层把按键、鼠标点击和后台加载结果翻译成消息，
//! Update 层消费消息并修改 Model。
//!
//!     AppMessage          // 全局消息（退出、返回、加载结果）
//!     ContentMessage      // 列表内的操作（移动光标、打开用户）
//!

mod app;
mod content;

pub use app::AppMessage;
pub use content::ContentMessage;
