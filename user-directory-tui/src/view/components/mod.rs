//! 通用 UI 组件

pub mod statusbar;
