//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。每一帧都从头构建全部组件。
//!
//!     layout.rs           // 主布局与区域划分（鼠标点击定位也使用同一套划分）
//!     theme.rs            // 颜色与样式
//!     text.rs             // 不可信文本的清理与截断
//!     pages/              // 用户列表 / 用户详情
//!     components/         // 状态栏
//!

mod components;
pub mod layout;
pub mod pages;
pub mod text;
pub mod theme;

pub use layout::render;
