use crate::index::IndexEntry;
use ftd_core::FlatToken;
use serde::{Deserialize, Serialize};

/// 命中等级，数值越小越靠前
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchRank {
    /// 名称完全相同
    ExactName,
    /// 名称包含查询串
    NameContains,
    /// 值包含查询串
    ValueContains,
    /// 类型包含查询串
    TypeContains,
    /// 查询拆成多个词后每个词都出现在可搜索文本中
    AllTerms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub token: FlatToken,
    pub rank: MatchRank,
    /// 条目在索引中的位置
    pub position: usize,
}

/// 搜索选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// 最多返回的结果数（默认不限）
    pub limit: Option<usize>,
}

/// 计算单个条目的命中等级
fn rank_entry(entry: &IndexEntry, query: &str, terms: &[&str]) -> Option<MatchRank> {
    let token = &entry.token;
    let name = token.name.to_lowercase();

    if name == query {
        return Some(MatchRank::ExactName);
    }
    if name.contains(query) {
        return Some(MatchRank::NameContains);
    }
    if token.value.to_lowercase().contains(query) {
        return Some(MatchRank::ValueContains);
    }
    if token.token_type.to_lowercase().contains(query) {
        return Some(MatchRank::TypeContains);
    }
    if terms.len() > 1 && terms.iter().all(|t| entry.searchable_text.contains(t)) {
        return Some(MatchRank::AllTerms);
    }
    None
}

/// 搜索 token（大小写不敏感）
///
/// 排序：名称完全匹配 > 名称包含 > 值包含 > 类型包含 > 多词匹配，
/// 同等级内保持索引顺序。空查询或无结果时返回空列表。
pub fn search_tokens(query: &str, index: &[IndexEntry]) -> Vec<RankedResult> {
    search_tokens_with(query, index, &SearchOptions::default())
}

pub fn search_tokens_with(
    query: &str,
    index: &[IndexEntry],
    options: &SearchOptions,
) -> Vec<RankedResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let terms: Vec<&str> = query.split_whitespace().collect();

    let mut results: Vec<RankedResult> = index
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            rank_entry(entry, &query, &terms).map(|rank| RankedResult {
                token: entry.token.clone(),
                rank,
                position,
            })
        })
        .collect();

    // sort_by_key 是稳定排序，同等级保持索引顺序
    results.sort_by_key(|r| r.rank);

    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    tracing::trace!(query = %query, results = results.len(), "searched tokens");
    results
}
