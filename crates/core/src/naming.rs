/// 路径分隔符：`/`、`.`、`-` 以及任意空白
fn is_separator(ch: char) -> bool {
    matches!(ch, '/' | '.' | '-') || ch.is_whitespace()
}

/// 将 token 路径转换为连字符 slug
///
/// 例如：
/// - "base/blue/50" → "base-blue-50"
/// - "Brand Primary Color" → "brand-primary-color"
/// - "spacing..md" → "spacing-md"（连续分隔符合并）
pub fn to_slug(path: &str) -> String {
    let mut slug = String::with_capacity(path.len());
    let mut pending_separator = false;

    for ch in path.chars() {
        if is_separator(ch) {
            pending_separator = true;
            continue;
        }
        // 首尾分隔符直接丢弃
        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;
        slug.extend(ch.to_lowercase());
    }

    slug
}

/// 将 token 路径转换为 CSS 自定义属性名
///
/// 纯函数：相同输入永远得到相同输出，生成 CSS 时别名据此还原为 `var(--x)`
///
/// ```
/// use ftd_core::naming::to_css_variable;
///
/// assert_eq!(to_css_variable("base/blue/50", None), "--base-blue-50");
/// assert_eq!(to_css_variable("spacing.md", Some("ftd")), "--ftd-spacing-md");
/// ```
pub fn to_css_variable(path: &str, prefix: Option<&str>) -> String {
    let slug = to_slug(path);
    let prefix = prefix.map(to_slug).filter(|p| !p.is_empty());

    match prefix {
        Some(prefix) => format!("--{}-{}", prefix, slug),
        None => format!("--{}", slug),
    }
}
