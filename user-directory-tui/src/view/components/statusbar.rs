//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, LoadState, ViewMode};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;
    let mut result = Vec::new();

    match app.mode {
        ViewMode::List => {
            if app.users.load == LoadState::Loaded && !app.users.records.is_empty() {
                result.push(("↑↓", hints.move_cursor));
                result.push(("Enter", hints.open));
            }
        }
        ViewMode::Detail { .. } => {
            result.push(("Esc", hints.back));
        }
    }

    result.push(("q", hints.quit));
    result
}
