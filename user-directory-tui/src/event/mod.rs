//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件：点击用户行、点击返回按钮、滚轮
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，下一帧自动重绘
//!
//!         鼠标点击通过 view/layout.rs 的 regions() 定位，
//!         与渲染使用同一套区域划分。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
