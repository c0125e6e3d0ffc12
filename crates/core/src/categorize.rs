use crate::document::TokenDocument;
use crate::types::TokenNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 顶层 token set 的种类（决定文档页面放在哪个标签下）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetKind {
    Colors,
    Spacing,
    Sizes,
    Radius,
    /// 其他（组件 token 等）
    Other,
}

/// 颜色 set 的标志性分组
const COLOR_GROUPS: [&str; 4] = ["base", "fill", "stroke", "text"];

/// 判断单个顶层节点的种类
///
/// - 含 `base` / `fill` / `stroke` / `text` 分组 → Colors
/// - 直接子节点全是 `dimension` token 时按键名判断：
///   space/spacing → Spacing，radius/border → Radius，size/width/height → Sizes
/// - 其余 → Other
pub fn detect_set_kind(node: &TokenNode) -> SetKind {
    let TokenNode::Group(children) = node else {
        return SetKind::Other;
    };

    if COLOR_GROUPS.iter().any(|g| children.contains_key(*g)) {
        return SetKind::Colors;
    }

    let only_dimensions = children
        .values()
        .all(|child| child.as_token().is_some_and(|t| t.token_type == "dimension"));

    if only_dimensions {
        let names = children
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if names.contains("space") || names.contains("spacing") {
            return SetKind::Spacing;
        }
        if names.contains("radius") || names.contains("border") {
            return SetKind::Radius;
        }
        if names.contains("size") || names.contains("width") || names.contains("height") {
            return SetKind::Sizes;
        }
    }

    SetKind::Other
}

/// 将所有顶层条目按种类分组（保持文档顺序）
pub fn categorize_sets(document: &TokenDocument) -> IndexMap<SetKind, Vec<String>> {
    let mut categories: IndexMap<SetKind, Vec<String>> = IndexMap::new();

    for (key, node) in document.entries() {
        categories
            .entry(detect_set_kind(node))
            .or_default()
            .push(key.to_string());
    }

    categories
}
