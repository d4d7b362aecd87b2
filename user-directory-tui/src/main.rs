//! User Directory TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 加载与配置 (`backend/`)
//!
//!
//! 启动顺序：
//!     init_logging()          // 日志写入缓存目录
//!     ConfigService::load()   // 读取配置：地址、主题、语言
//!     UserService::spawn_load // 后台发起唯一一次请求
//!     init_terminal()         // 原始模式 + 备用屏幕 + 鼠标捕获
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use user_directory_core::HttpUserSource;

use backend::{AppConfig, ConfigService, LocalConfigService, UserService};
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};

/// 覆盖配置文件路径的环境变量
const CONFIG_ENV: &str = "USER_DIRECTORY_CONFIG";

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（失败时不记录日志，继续运行）
    if let Ok(path) = init_logging() {
        tracing::info!("Starting User Directory, logging to {}", path.display());
    }

    // 2. 加载配置
    let config = load_config();
    let language = Language::from_code(&config.language).unwrap_or_default();
    view::theme::set_theme(config.theme);
    i18n::set_language(language);
    log::info!(
        "Endpoint {}, theme {:?}, language {}",
        config.endpoint,
        config.theme,
        language.code()
    );

    // 3. 后台发起加载
    let service = UserService::new()?;
    let loads = service.spawn_load(Arc::new(HttpUserSource::new(config.endpoint)));

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &loads);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}

/// 读取配置，失败时使用默认值
fn load_config() -> AppConfig {
    let service = std::env::var_os(CONFIG_ENV)
        .map_or_else(LocalConfigService::new, LocalConfigService::with_path);

    service.load().unwrap_or_else(|e| {
        log::warn!("Using default config: {e:#}");
        AppConfig::default()
    })
}
