//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     mod logging;        // 日志初始化（写入缓存目录下的日志文件）
//!     mod terminal;       // 终端初始化和恢复
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲与字符回显，每个按键立即生效
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 应用在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     · Mouse Capture（鼠标捕获）
//!         - 接收点击与滚轮事件，用于点击用户行和返回按钮
//!
//!     stdout 被 TUI 占用，所以日志只能写入文件。
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!           否则终端会保持在原始模式，用户输入不会正常显示。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
