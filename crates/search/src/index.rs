use ftd_core::{flatten, FlatToken, TokenDocument};
use serde::{Deserialize, Serialize};

/// 基础色板分组；文档页面把 `base.blue.500` 列为 `blue-500`
const PRIMITIVE_GROUP: &str = "base-";

/// 搜索索引条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub token: FlatToken,
    /// 小写的 "name value type"
    pub searchable_text: String,
}

impl IndexEntry {
    pub fn new(mut token: FlatToken) -> Self {
        if let Some(rest) = token.name.strip_prefix(PRIMITIVE_GROUP) {
            if !rest.is_empty() {
                token.name = rest.to_string();
            }
        }

        let searchable_text =
            format!("{} {} {}", token.name, token.value, token.token_type).to_lowercase();

        Self {
            token,
            searchable_text,
        }
    }
}

/// 为文档建立搜索索引（顺序与扁平化结果一致）
///
/// 文档变化后需要重新建立；索引本身不持有文档
pub fn index_tokens(document: &TokenDocument) -> Vec<IndexEntry> {
    let entries: Vec<IndexEntry> = flatten(document).into_iter().map(IndexEntry::new).collect();
    tracing::trace!(entries = entries.len(), "indexed tokens");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_all_tokens() {
        let doc = TokenDocument::from_value(&json!({
            "Foundation/Value": {
                "base": {
                    "blue": { "500": { "value": "#3b82f6", "type": "color" } },
                    "space": { "md": { "value": "16px", "type": "dimension" } }
                }
            },
            "Semantic/Value": {
                "fill": { "primary": { "value": "{base.blue.500}", "type": "color" } }
            }
        }));

        let index = index_tokens(&doc);
        let names: Vec<&str> = index.iter().map(|e| e.token.name.as_str()).collect();

        assert_eq!(names, vec!["blue-500", "space-md", "fill-primary"]);
        assert_eq!(index[0].token.css_variable, "--base-blue-500");
        assert_eq!(index[2].searchable_text, "fill-primary {base.blue.500} color");
    }

    #[test]
    fn test_searchable_text_is_lowercase() {
        let doc = TokenDocument::from_value(&json!({
            "Brand": { "value": "#ABCDEF", "type": "Color" }
        }));

        let index = index_tokens(&doc);
        assert_eq!(index[0].searchable_text, "brand #abcdef color");
        assert_eq!(index[0].token.value, "#ABCDEF");
    }

    #[test]
    fn test_lone_base_token_keeps_name() {
        let doc = TokenDocument::from_value(&json!({
            "base": { "value": "4px", "type": "dimension" }
        }));
        assert_eq!(index_tokens(&doc)[0].token.name, "base");
    }

    #[test]
    fn test_empty_document() {
        assert!(index_tokens(&TokenDocument::default()).is_empty());
    }

    #[test]
    fn test_null_leaf_does_not_panic() {
        let doc = TokenDocument::from_value(&json!({
            "Foundation/Value": { "base": { "color": { "50": null } } }
        }));
        assert!(index_tokens(&doc).is_empty());
    }
}
