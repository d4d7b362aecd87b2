//! Response body previews for the developer log

use std::borrow::Cow;

/// Number of characters kept from a body before it is cut
const PREVIEW_CHARS: usize = 200;

/// Short form of a response body, safe to put on one log line
///
/// Bodies longer than `PREVIEW_CHARS` characters are cut on a character
/// boundary and suffixed with their total size in bytes.
pub fn body_preview(body: &str) -> Cow<'_, str> {
    match body.char_indices().nth(PREVIEW_CHARS) {
        None => Cow::Borrowed(body),
        Some((cut, _)) => Cow::Owned(format!("{}… ({} bytes)", &body[..cut], body.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_borrowed() {
        assert!(matches!(body_preview("[]"), Cow::Borrowed("[]")));
    }

    #[test]
    fn exact_limit_is_kept() {
        let body = "a".repeat(PREVIEW_CHARS);
        assert_eq!(body_preview(&body), body);
    }

    #[test]
    fn long_body_reports_size() {
        let body = format!("[{}]", "x".repeat(PREVIEW_CHARS * 2));
        let preview = body_preview(&body);
        assert_eq!(preview.chars().filter(|c| *c == 'x').count(), PREVIEW_CHARS - 1);
        assert!(preview.ends_with(&format!("… ({} bytes)", body.len())));
    }

    #[test]
    fn cut_lands_between_characters() {
        let body = "用户".repeat(PREVIEW_CHARS);
        let preview = body_preview(&body);
        assert!(preview.starts_with(&"用户".repeat(PREVIEW_CHARS / 2)));
    }
}
