pub mod categorize;
pub mod color;
pub mod document;
pub mod flatten;
pub mod naming;
pub mod resolve;
pub mod scale;
pub mod token_map;
pub mod types;

// Re-export commonly used types
pub use document::{LoadError, TokenDocument, TokenPath, TokenVisitor};
pub use flatten::{flatten, flatten_with_prefix};
pub use naming::{to_css_variable, to_slug};
pub use resolve::{is_alias, resolve, resolve_with_depth, MAX_ALIAS_DEPTH};
pub use token_map::{build_token_map, TokenMap};
pub use types::{is_token_value, FlatToken, Token, TokenNode};
