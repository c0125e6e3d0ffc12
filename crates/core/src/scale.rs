use crate::document::TokenDocument;
use crate::flatten::flatten;
use crate::resolve::resolve;
use crate::token_map::TokenMap;
use serde::{Deserialize, Serialize};

/// 提取字符串开头的数值
///
/// - "16px" → 16
/// - "1.5rem" → 1.5
/// - "-4px" → -4
/// - "px" → None
pub fn parse_numeric_value(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }
    value[..end].parse().ok()
}

/// 尺寸 / 圆角刻度中的一项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleToken {
    pub name: String,
    pub value: String,
    pub resolved_value: String,
    pub numeric_value: f64,
    pub css_variable: String,
}

/// 解析某个顶层条目下的所有 token，按数值升序排列
///
/// 无法解析数值的 token 记为 0；数值相同时保持文档顺序
pub fn parse_scale(document: &TokenDocument, key: &str, map: &TokenMap) -> Vec<ScaleToken> {
    let scope = format!("{}.", key);

    let mut scale: Vec<ScaleToken> = flatten(document)
        .into_iter()
        .filter(|t| t.path.starts_with(&scope))
        .map(|t| {
            let resolved_value = resolve(&t.value, map);
            let numeric_value = parse_numeric_value(&resolved_value).unwrap_or(0.0);
            ScaleToken {
                name: t.name,
                value: t.value,
                resolved_value,
                numeric_value,
                css_variable: t.css_variable,
            }
        })
        .collect();

    scale.sort_by(|a, b| a.numeric_value.total_cmp(&b.numeric_value));
    scale
}
