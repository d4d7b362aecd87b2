//! 列表操作更新逻辑

use crate::message::ContentMessage;
use crate::model::{App, ViewMode};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    // 详情页内没有列表操作
    if app.mode.is_detail() {
        return;
    }

    match msg {
        ContentMessage::SelectPrevious => app.users.select_previous(),
        ContentMessage::SelectNext => app.users.select_next(),
        ContentMessage::SelectFirst => app.users.select_first(),
        ContentMessage::SelectLast => app.users.select_last(),
        ContentMessage::Confirm => {
            let cursor = app.users.cursor;
            open_user(app, cursor);
        }
        ContentMessage::Activate(index) => open_user(app, index),
    }
}

/// 选中第 `index` 行并进入详情
fn open_user(app: &mut App, index: usize) {
    if let Some(id) = app.users.select_index(index) {
        log::debug!("Open user {id}");
        app.mode = ViewMode::Detail { id };
    }
}
