//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, ViewMode};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 屏幕区域划分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// 标题栏
    pub title: Rect,
    /// 带边框的内容区
    pub content: Rect,
    /// 内容区边框内部，列表或详情绘制于此
    pub body: Rect,
    /// 状态栏
    pub status: Rect,
}

/// 计算屏幕区域划分
///
/// 渲染与鼠标点击定位都使用这个函数，保证两者一致。
pub fn regions(area: Rect) -> Regions {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(area);

    let content = main_layout[1];
    Regions {
        title: main_layout[0],
        content,
        body: content_block("").inner(content),
        status: main_layout[2],
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let regions = regions(frame.area());

    render_title_bar(frame, regions.title);
    render_content(app, frame, &regions);
    components::statusbar::render(app, frame, regions.status);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据视图模式渲染内容区，两个区域同一时刻只绘制一个
fn render_content(app: &App, frame: &mut Frame, regions: &Regions) {
    let texts = t();

    let title = match app.mode {
        ViewMode::List if app.users.records.is_empty() => format!(" {} ", texts.users.list_title),
        ViewMode::List => format!(
            " {} ({}) ",
            texts.users.list_title,
            app.users.records.len()
        ),
        ViewMode::Detail { .. } => format!(" {} ", texts.users.detail_title),
    };

    frame.render_widget(content_block(&title), regions.content);

    match app.mode {
        ViewMode::List => pages::user_list::render(app, frame, regions.body),
        ViewMode::Detail { .. } => pages::user_detail::render(app, frame, regions.body),
    }
}

fn content_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border))
}
