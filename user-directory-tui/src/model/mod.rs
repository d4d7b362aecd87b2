//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod view_mode;      // 视图模式（列表 / 详情）
//!
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 view_mode.rs 与 state/ 都表示页面状态，但两者有不同：
//!         - ViewMode 只说明当前显示哪一个区域（列表或详情），
//!             详情模式只携带用户 id，不复制记录；
//!         - UsersState 存储用户集合、选中 id、光标与加载状态，
//!             列表与详情共用同一份集合。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 视图切换
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     列表页按 Enter / 点击某行
//!         ↓
//!     update 设置 users.selected_id = Some(id)，mode = ViewMode::Detail { id }
//!         ↓
//!     view/layout.rs 根据 mode 只渲染详情区域
//!
//!     详情页按 Esc / 点击返回按钮
//!         ↓
//!     mode = ViewMode::List（selected_id 保留，列表重新高亮该行）
//!

mod app;
mod view_mode;

pub mod state;

pub use app::App;
pub use state::{LoadState, UsersState};
pub use view_mode::ViewMode;
