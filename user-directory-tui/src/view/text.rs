//! 文本安全处理
//!
//! 用户记录来自远端，不可信。所有字段在进入 `Span` 之前都要经过 `sanitize`，
//! 去掉控制字符，防止记录内容向终端注入转义序列。

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 移除控制字符（制表符替换为空格）
pub fn sanitize(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }

    Cow::Owned(
        value
            .chars()
            .filter_map(|c| match c {
                '\t' => Some(' '),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect(),
    )
}

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate_to_width(value: &str, width: usize) -> Cow<'_, str> {
    if value.width() <= width {
        return Cow::Borrowed(value);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        // 为省略号预留一列
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}

/// 按显示宽度折行，每行不超过 `width` 列
///
/// 在字符边界处断开，不按单词断开，保证内容一个字符都不丢。
pub fn wrap_to_width(value: &str, width: usize) -> Vec<String> {
    if width == 0 || value.width() <= width {
        return vec![value.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
