//! 用户加载服务
//!
//! 启动时调用一次 `spawn_load`，之后主循环每一帧通过 `try_recv` 检查结果。

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::{Builder, Runtime};
use user_directory_core::{LoadError, UserRecord, UserSource};

/// 一次加载的结果
pub type LoadResult = Result<Vec<UserRecord>, LoadError>;

/// 用户加载服务
///
/// 持有 tokio 运行时，生命周期与应用相同
pub struct UserService {
    runtime: Runtime,
}

impl UserService {
    /// 创建服务（启动后台运行时）
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("user-directory-loader")
            .build()?;
        Ok(Self { runtime })
    }

    /// 在后台发起一次加载，返回接收结果的 channel
    pub fn spawn_load(&self, source: Arc<dyn UserSource>) -> Receiver<LoadResult> {
        let (tx, rx) = mpsc::channel();

        self.runtime.spawn(async move {
            let result = source.fetch_users().await;
            if tx.send(result).is_err() {
                log::warn!("UI loop exited before users were delivered");
            }
        });

        rx
    }
}
