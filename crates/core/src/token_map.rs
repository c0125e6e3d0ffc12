use crate::document::{TokenDocument, TokenPath};
use crate::types::Token;
use indexmap::IndexMap;

/// 完整路径 → 原始值
///
/// 键为从文档根（去掉保留键）到叶子的点分路径，如 `"Foundation/Value.base.blue.50"`。
/// 使用 IndexMap 保持文档顺序，后缀回退查找依赖这个顺序。
pub type TokenMap = IndexMap<String, String>;

/// 构建 token map
///
/// 每个叶子恰好出现一次，分组节点不会出现；空文档得到空 map
pub fn build_token_map(document: &TokenDocument) -> TokenMap {
    let mut map = TokenMap::new();

    document.walk(&mut |path: &TokenPath<'_>, token: &Token| {
        map.insert(path.full(), token.value.clone());
    });

    tracing::trace!(tokens = map.len(), "built token map");
    map
}
