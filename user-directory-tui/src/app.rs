//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     app.viewport = 终端大小                          // 供鼠标点击定位
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if 后台加载有结果 { update(UsersLoaded(..)) }     // 只会发生一次
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use ratatui::layout::Rect;
use user_directory_core::LoadError;

use crate::backend::LoadResult;
use crate::event;
use crate::message::AppMessage;
use crate::model::{App, LoadState};
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, loads: &Receiver<LoadResult>) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 检查后台加载结果
        if let Some(msg) = poll_load(app, loads) {
            update::update(app, msg);
            continue;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 取出后台加载结果（仍在加载时才检查）
fn poll_load(app: &App, loads: &Receiver<LoadResult>) -> Option<AppMessage> {
    if app.users.load != LoadState::Loading {
        return None;
    }

    match loads.try_recv() {
        Ok(result) => Some(AppMessage::UsersLoaded(result)),
        Err(TryRecvError::Empty) => None,
        // 加载任务未送出结果就结束了
        Err(TryRecvError::Disconnected) => Some(AppMessage::UsersLoaded(Err(LoadError::Network {
            detail: "loader stopped without a result".to_string(),
        }))),
    }
}
