pub mod highlight;
pub mod index;
pub mod matcher;

// Re-export main types
pub use highlight::{highlight_match, highlight_match_with};
pub use index::{index_tokens, IndexEntry};
pub use matcher::{search_tokens, search_tokens_with, MatchRank, RankedResult, SearchOptions};
