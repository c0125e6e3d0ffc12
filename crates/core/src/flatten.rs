use crate::document::{TokenDocument, TokenPath};
use crate::naming::{to_css_variable, to_slug};
use crate::types::{FlatToken, Token};

/// 将文档扁平化为 token 记录列表
///
/// 深度优先、文档顺序，相同输入得到相同输出（搜索索引和代码生成都依赖这一点）
pub fn flatten(document: &TokenDocument) -> Vec<FlatToken> {
    flatten_with_prefix(document, None)
}

/// 带 CSS 变量前缀的 [`flatten`]
pub fn flatten_with_prefix(document: &TokenDocument, prefix: Option<&str>) -> Vec<FlatToken> {
    let mut tokens = Vec::new();

    document.walk(&mut |path: &TokenPath<'_>, token: &Token| {
        let local = path.local();
        tokens.push(FlatToken {
            name: to_slug(&local),
            value: token.value.clone(),
            token_type: token.token_type.clone(),
            css_variable: to_css_variable(&local, prefix),
            path: path.full(),
        });
    });

    tracing::trace!(tokens = tokens.len(), "flattened token document");
    tokens
}
