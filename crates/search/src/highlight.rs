/// 默认高亮标记
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// 大小写不敏感地查找第一次出现的位置，返回原文中的字节区间
///
/// 逐字符比较，非 ASCII 文本小写化后长度变化也不会错位
fn find_case_insensitive(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    for (start, _) in text.char_indices() {
        let mut rest = text[start..].char_indices();
        let mut end = start;
        let mut matched = true;

        for q in query.chars() {
            match rest.next() {
                Some((offset, c)) if chars_eq_ignore_case(c, q) => {
                    end = start + offset + c.len_utf8();
                }
                _ => {
                    matched = false;
                    break;
                }
            }
        }

        if matched {
            return Some((start, end));
        }
    }

    None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// 用 `<mark>` 包裹第一次匹配，保留原文大小写
///
/// ```
/// use ftd_search::highlight_match;
///
/// assert_eq!(highlight_match("Background", "back"), "<mark>Back</mark>ground");
/// ```
pub fn highlight_match(text: &str, query: &str) -> String {
    highlight_match_with(text, query, MARK_OPEN, MARK_CLOSE)
}

/// 自定义标记的 [`highlight_match`]；无匹配时原样返回
pub fn highlight_match_with(text: &str, query: &str, open: &str, close: &str) -> String {
    match find_case_insensitive(text, query) {
        Some((start, end)) => format!(
            "{}{}{}{}{}",
            &text[..start],
            open,
            &text[start..end],
            close,
            &text[end..]
        ),
        None => text.to_string(),
    }
}
