//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 列表内操作
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     列表内的子消息委托给 content.rs 处理。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;

use crate::message::AppMessage;
use crate::model::{App, ViewMode};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::GoBack => {
            // 只有详情页可以返回；集合与选中 id 保持不变
            if app.mode.is_detail() {
                app.mode = ViewMode::List;
            }
        }

        AppMessage::UsersLoaded(Ok(users)) => {
            log::info!("Loaded {} users", users.len());
            app.users.set_users(users);
            app.mode = ViewMode::List;
        }

        AppMessage::UsersLoaded(Err(e)) => {
            log::error!("Fetch Error: {e}");
            app.users.set_failed();
            app.mode = ViewMode::List;
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use user_directory_core::LoadError;

    use super::*;
    use crate::message::ContentMessage;
    use crate::model::LoadState;
    use crate::test_support::{loaded_app, sample_users};

    #[test]
    fn load_success_shows_list() {
        let app = loaded_app(sample_users(3));
        assert_eq!(app.mode, ViewMode::List);
        assert_eq!(app.users.load, LoadState::Loaded);
        assert_eq!(app.users.records.len(), 3);
    }

    #[test]
    fn load_failure_shows_list_without_rows() {
        let mut app = App::new();
        update(
            &mut app,
            AppMessage::UsersLoaded(Err(LoadError::Status { status: 500 })),
        );
        assert_eq!(app.mode, ViewMode::List);
        assert_eq!(app.users.load, LoadState::Failed);
        assert!(app.users.records.is_empty());
    }

    #[test]
    fn every_load_error_shows_same_failure() {
        let errors = [
            LoadError::Network {
                detail: "connection refused".into(),
            },
            LoadError::Status { status: 404 },
            LoadError::Parse {
                detail: "expected value".into(),
            },
        ];
        for err in errors {
            let mut app = App::new();
            update(&mut app, AppMessage::UsersLoaded(Err(err)));
            assert_eq!(app.mode, ViewMode::List);
            assert_eq!(app.users.load, LoadState::Failed);
        }
    }

    #[test]
    fn activate_then_back_keeps_selection() {
        let mut app = loaded_app(sample_users(5));
        let records = app.users.records.clone();

        update(&mut app, AppMessage::Content(ContentMessage::Activate(3)));
        assert_eq!(app.mode, ViewMode::Detail { id: 4 });

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.mode, ViewMode::List);
        assert_eq!(app.users.selected_id, Some(4));
        // 返回时不重新获取，仍是同一份集合
        assert!(std::sync::Arc::ptr_eq(&records, &app.users.records));
    }

    #[test]
    fn go_back_in_list_is_noop() {
        let mut app = loaded_app(sample_users(2));
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.mode, ViewMode::List);
        assert_eq!(app.users.selected_id, None);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
