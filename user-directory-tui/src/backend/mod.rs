//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! UI 层保持同步，异步的网络请求在 Backend 持有的 tokio 运行时中执行，
//! 结果通过 channel 交回主循环。
//!
//!     mod config_service;     // 配置加载
//!     mod user_service;       // 用户集合加载
//!

mod config_service;
mod user_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use user_service::{LoadResult, UserService};
