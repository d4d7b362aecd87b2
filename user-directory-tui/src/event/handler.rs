//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage};
use crate::model::{App, ViewMode};
use crate::view::layout::regions;
use crate::view::pages::{user_detail, user_list};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::BACK_ALT.matches(&key) {
        return AppMessage::GoBack;
    }

    match app.mode {
        ViewMode::List => handle_list_keys(key),
        ViewMode::Detail { .. } => AppMessage::Noop,
    }
}

/// 处理列表页面的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::NAV_UP.matches(&key) || key.code == KeyCode::Char('k') {
        ContentMessage::SelectPrevious
    } else if DefaultKeymap::NAV_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        ContentMessage::SelectNext
    } else if DefaultKeymap::NAV_FIRST.matches(&key) {
        ContentMessage::SelectFirst
    } else if DefaultKeymap::NAV_LAST.matches(&key) {
        ContentMessage::SelectLast
    } else if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        ContentMessage::Confirm
    } else {
        return AppMessage::Noop;
    };

    AppMessage::Content(msg)
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    match (mouse.kind, app.mode) {
        (MouseEventKind::Down(MouseButton::Left), _) => handle_click(mouse.column, mouse.row, app),
        (MouseEventKind::ScrollDown, ViewMode::List) => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        (MouseEventKind::ScrollUp, ViewMode::List) => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        _ => AppMessage::Noop,
    }
}

/// 左键点击：列表页点击用户行，详情页点击返回按钮
fn handle_click(x: u16, y: u16, app: &App) -> AppMessage {
    let body = regions(app.viewport).body;

    match app.mode {
        ViewMode::List => user_list::row_at(body, &app.users, x, y)
            .map_or(AppMessage::Noop, |index| {
                AppMessage::Content(ContentMessage::Activate(index))
            }),
        ViewMode::Detail { .. } => {
            if user_detail::back_button_area(app, body).contains(Position::new(x, y)) {
                AppMessage::GoBack
            } else {
                AppMessage::Noop
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;

    use super::*;
    use crate::test_support::{loaded_app, sample_users};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app_with_viewport() -> App {
        let mut app = loaded_app(sample_users(3));
        app.viewport = Rect::new(0, 0, 80, 24);
        app
    }

    #[test]
    fn quit_keys() {
        let app = App::new();
        assert!(matches!(handle_event(key(KeyCode::Char('q')), &app), AppMessage::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn release_ignored() {
        let app = App::new();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn list_navigation_keys() {
        let app = app_with_viewport();
        assert!(matches!(
            handle_event(key(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Up), &app),
            AppMessage::Content(ContentMessage::SelectPrevious)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Confirm)
        ));
    }

    #[test]
    fn backspace_goes_back() {
        let app = App::new();
        assert!(matches!(
            handle_event(key(KeyCode::Backspace), &app),
            AppMessage::GoBack
        ));
    }

    #[test]
    fn click_on_row_activates_it() {
        let app = app_with_viewport();
        let body = regions(app.viewport).body;
        let msg = handle_click(body.x + 2, body.y + 1, &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::Activate(1))));
    }

    #[test]
    fn click_below_rows_is_noop() {
        let app = app_with_viewport();
        let body = regions(app.viewport).body;
        assert!(matches!(handle_click(body.x, body.y + 5, &app), AppMessage::Noop));
    }

    #[test]
    fn click_outside_back_button_is_noop() {
        let mut app = app_with_viewport();
        app.mode = ViewMode::Detail { id: 1 };
        let body = regions(app.viewport).body;
        assert!(matches!(handle_click(body.x, body.y, &app), AppMessage::Noop));
        // 标题、空行、五个字段、空行之后
        assert!(matches!(
            handle_click(body.x, body.y + 8, &app),
            AppMessage::GoBack
        ));
    }

    #[test]
    fn scroll_in_detail_is_noop() {
        let mut app = app_with_viewport();
        app.mode = ViewMode::Detail { id: 1 };
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(handle_event(scroll, &app), AppMessage::Noop));
    }
}
