//! 用户列表页面视图

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use user_directory_core::UserRecord;

use crate::i18n::t;
use crate::model::{App, LoadState, UsersState};
use crate::view::text::{sanitize, truncate_to_width};
use crate::view::theme::{colors, Styles};

/// 行首标记所占列数：光标标记 + 空格 + 选中标记 + 空格
const MARKER_WIDTH: u16 = 4;

/// 渲染用户列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    match app.users.load {
        LoadState::Loading => render_notice(frame, area, texts.common.loading, c.muted),
        LoadState::Failed => render_notice(frame, area, texts.users.load_failed, c.error),
        LoadState::Loaded if app.users.records.is_empty() => {
            render_notice(frame, area, texts.users.no_users, c.muted);
        }
        LoadState::Loaded => render_list(&app.users, frame, area),
    }
}

/// 渲染单行提示，整个列表区域只包含这一行
fn render_notice(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(Line::styled(text.to_string(), Style::default().fg(color)));
    frame.render_widget(paragraph, area);
}

/// 渲染用户列表（只构建可见窗口内的行）
fn render_list(users: &UsersState, frame: &mut Frame, area: Rect) {
    let height = usize::from(area.height);
    let offset = scroll_offset(users.records.len(), users.cursor, height);
    let label_width = usize::from(area.width.saturating_sub(MARKER_WIDTH));

    let items: Vec<ListItem> = users
        .records
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, user)| row(users, user, i == users.cursor, label_width))
        .collect();

    frame.render_widget(List::new(items), area);
}

/// 构建一行：只显示用户名，选中用户带 `●` 标记
fn row(
    users: &UsersState,
    user: &UserRecord,
    is_cursor: bool,
    label_width: usize,
) -> ListItem<'static> {
    let is_selected = users.is_selected(user);

    let style = if is_selected {
        Styles::selected()
    } else if is_cursor {
        Styles::cursor()
    } else {
        Style::default().fg(colors().fg)
    };

    let name = sanitize(&user.name);
    let label = truncate_to_width(&name, label_width).into_owned();

    ListItem::new(Line::from(vec![
        Span::styled(if is_cursor { "›" } else { " " }, Styles::cursor()),
        Span::raw(" "),
        Span::styled(if is_selected { "●" } else { " " }, style),
        Span::raw(" "),
        Span::styled(label, style),
    ]))
}

/// 让光标保持可见的滚动偏移
pub fn scroll_offset(len: usize, cursor: usize, height: usize) -> usize {
    if height == 0 || cursor < height {
        0
    } else {
        (cursor + 1 - height).min(len.saturating_sub(height))
    }
}

/// 屏幕坐标对应的行号，坐标不在任何行上时返回 `None`
pub fn row_at(area: Rect, users: &UsersState, x: u16, y: u16) -> Option<usize> {
    if users.load != LoadState::Loaded || !area.contains(Position::new(x, y)) {
        return None;
    }

    let offset = scroll_offset(users.records.len(), users.cursor, usize::from(area.height));
    let index = offset + usize::from(y - area.y);
    (index < users.records.len()).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_users;

    fn loaded(count: usize) -> UsersState {
        let mut users = UsersState::default();
        users.set_users(sample_users(count));
        users
    }

    #[test]
    fn no_scroll_while_cursor_visible() {
        assert_eq!(scroll_offset(50, 0, 10), 0);
        assert_eq!(scroll_offset(50, 9, 10), 0);
    }

    #[test]
    fn scroll_follows_cursor() {
        assert_eq!(scroll_offset(50, 10, 10), 1);
        assert_eq!(scroll_offset(50, 49, 10), 40);
    }

    #[test]
    fn scroll_zero_height() {
        assert_eq!(scroll_offset(5, 3, 0), 0);
    }

    #[test]
    fn row_at_maps_rows() {
        let area = Rect::new(1, 2, 40, 10);
        let users = loaded(3);
        assert_eq!(row_at(area, &users, 5, 2), Some(0));
        assert_eq!(row_at(area, &users, 5, 4), Some(2));
        // 最后一个用户之下的空白
        assert_eq!(row_at(area, &users, 5, 5), None);
        // 区域之外
        assert_eq!(row_at(area, &users, 0, 2), None);
        assert_eq!(row_at(area, &users, 5, 12), None);
    }

    #[test]
    fn row_at_accounts_for_scroll() {
        let area = Rect::new(0, 0, 40, 5);
        let mut users = loaded(20);
        users.cursor = 12;
        // 偏移为 8，第一行是第 8 个用户
        assert_eq!(row_at(area, &users, 1, 0), Some(8));
        assert_eq!(row_at(area, &users, 1, 4), Some(12));
    }

    #[test]
    fn row_at_while_loading() {
        let users = UsersState::default();
        assert_eq!(row_at(Rect::new(0, 0, 10, 10), &users, 1, 1), None);
    }
}
