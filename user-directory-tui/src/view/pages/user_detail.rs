//! 用户详情页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use user_directory_core::UserRecord;

use crate::i18n::t;
use crate::model::App;
use crate::view::text::{sanitize, wrap_to_width};
use crate::view::theme::Styles;

/// 详情页展示的字段，全部已清理
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// 完整链接 `http://<website>`
    pub website: String,
    /// `street, suite, city`
    pub address: String,
    pub company: String,
}

impl DetailFields {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            name: sanitize(&user.name).into_owned(),
            email: sanitize(&user.email).into_owned(),
            phone: sanitize(&user.phone).into_owned(),
            website: sanitize(&user.website_url()).into_owned(),
            address: sanitize(&user.address_line()).into_owned(),
            company: sanitize(&user.company.name).into_owned(),
        }
    }
}

/// 渲染用户详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(user) = app.current_user() else {
        return;
    };

    let lines = detail_lines(&DetailFields::from_record(user), area.width);
    let Some(row) = back_row(lines.len(), area) else {
        return;
    };

    frame.render_widget(Paragraph::new(lines), Rect { height: row, ..area });
    frame.render_widget(
        Paragraph::new(Line::styled(back_button_text(), Styles::cursor())),
        back_rect(area, row),
    );
}

/// 返回按钮之前的所有行
///
/// 过长的值在标签列之后折行，续行与首行的值左对齐。
fn detail_lines(fields: &DetailFields, width: u16) -> Vec<Line<'static>> {
    let texts = &t().users;

    let label_width = [
        texts.email,
        texts.phone,
        texts.website,
        texts.address,
        texts.company,
    ]
    .iter()
    .map(|label| label.width())
    .max()
    .unwrap_or(0);

    let width = usize::from(width);
    let value_width = width.saturating_sub(label_width + 1);

    let mut lines: Vec<Line<'static>> = wrap_to_width(&fields.name, width)
        .into_iter()
        .map(|part| Line::styled(part, Styles::title()))
        .collect();
    lines.push(Line::from(""));

    for (label, value, style) in [
        (texts.email, &fields.email, Style::default()),
        (texts.phone, &fields.phone, Style::default()),
        (texts.website, &fields.website, Styles::link()),
        (texts.address, &fields.address, Style::default()),
        (texts.company, &fields.company, Style::default()),
    ] {
        for (i, part) in wrap_to_width(value, value_width).into_iter().enumerate() {
            let head = if i == 0 {
                pad(label, label_width)
            } else {
                " ".repeat(label_width)
            };
            lines.push(Line::from(vec![
                Span::styled(head, Styles::label()),
                Span::raw(" "),
                Span::styled(part, style),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}

/// 返回按钮所在行（相对内容区顶部）
///
/// 紧跟在详情行之后；内容区不够高时固定在最后一行。
fn back_row(detail_rows: usize, body: Rect) -> Option<u16> {
    if body.height == 0 {
        return None;
    }
    let rows = u16::try_from(detail_rows).unwrap_or(u16::MAX);
    Some(rows.min(body.height - 1))
}

/// 返回按钮文本
fn back_button_text() -> String {
    format!("[ {} ]", t().users.back_to_list)
}

fn back_rect(body: Rect, row: u16) -> Rect {
    let width = u16::try_from(back_button_text().width()).unwrap_or(u16::MAX);
    Rect::new(body.x, body.y + row, width.min(body.width), 1)
}

/// 返回按钮的屏幕区域，与 `render` 的排版一致
pub fn back_button_area(app: &App, body: Rect) -> Rect {
    let Some(user) = app.current_user() else {
        return Rect::default();
    };

    let lines = detail_lines(&DetailFields::from_record(user), body.width);
    back_row(lines.len(), body).map_or_else(Rect::default, |row| back_rect(body, row))
}

/// 按显示宽度右侧补空格
fn pad(label: &str, width: usize) -> String {
    let fill = width.saturating_sub(label.width());
    format!("{label}{}", " ".repeat(fill))
}
