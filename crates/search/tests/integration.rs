use ftd_core::TokenDocument;
use ftd_search::{highlight_match, index_tokens, search_tokens, MatchRank};
use pretty_assertions::assert_eq;

const TOKENS: &str = r##"{
    "Foundation/Value": {
        "base": {
            "blue": {
                "500": { "value": "#3b82f6", "type": "color" }
            },
            "space": {
                "md": { "value": "16px", "type": "dimension" }
            }
        }
    },
    "Semantic/Value": {
        "fill": {
            "primary": { "value": "{base.blue.500}", "type": "color" }
        }
    }
}"##;

#[test]
fn test_search_ranking_end_to_end() {
    let doc = TokenDocument::from_json(TOKENS).expect("Failed to load tokens");
    let index = index_tokens(&doc);
    assert_eq!(index.len(), 3);

    assert_eq!(search_tokens("primary", &index)[0].token.name, "fill-primary");
    assert_eq!(search_tokens("16px", &index)[0].token.name, "space-md");
    assert_eq!(search_tokens("blue-500", &index)[0].token.name, "blue-500");
    assert_eq!(search_tokens("xyz123", &index).len(), 0);
}

#[test]
fn test_ranked_result_order() {
    let doc = TokenDocument::from_json(TOKENS).unwrap();
    let index = index_tokens(&doc);

    let ranked: Vec<(String, MatchRank)> = search_tokens("blue", &index)
        .into_iter()
        .map(|r| (r.token.name, r.rank))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("blue-500".to_string(), MatchRank::NameContains),
            ("fill-primary".to_string(), MatchRank::ValueContains),
        ]
    );
}

#[test]
fn test_highlight_search_results() {
    let doc = TokenDocument::from_json(TOKENS).unwrap();
    let index = index_tokens(&doc);

    let highlighted: Vec<String> = search_tokens("PRI", &index)
        .iter()
        .map(|r| highlight_match(&r.token.name, "PRI"))
        .collect();

    assert_eq!(highlighted, vec!["fill-<mark>pri</mark>mary"]);
}

#[test]
fn test_empty_and_partial_documents() {
    let empty = TokenDocument::from_json("{}").unwrap();
    assert!(index_tokens(&empty).is_empty());

    let partial = TokenDocument::from_json(r##"{ "Foundation/Value": {} }"##).unwrap();
    let index = index_tokens(&partial);
    assert!(index.is_empty());
    assert!(search_tokens("blue", &index).is_empty());
}
