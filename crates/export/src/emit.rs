use crate::dialect::{AliasPolicy, Dialect, Entry, Groups, TokenRef};
use crate::options::{AliasMode, ExportOptions};
use ftd_core::resolve::{alias_target, lookup_alias_target};
use ftd_core::{resolve, to_css_variable, to_slug, FlatToken, TokenMap};
use std::collections::HashMap;

/// 通用发射器
///
/// 所有格式共用的别名处理：
/// - Reference：别名 → 方言引用写法（指向别名直接指向的 token，不跟随整条链）
/// - SelfReference：每个 token → 自身变量的引用
/// - Resolve：解析后的字面值
/// - Raw：原始值
///
/// `tokens` 需与 `map` 来自同一份文档
pub fn emit(
    dialect: &dyn Dialect,
    tokens: &[FlatToken],
    map: &TokenMap,
    options: &ExportOptions,
) -> String {
    let by_path: HashMap<&str, &FlatToken> =
        tokens.iter().map(|t| (t.path.as_str(), t)).collect();

    let policy = match (dialect.alias_policy(), options.alias_mode) {
        (AliasPolicy::Reference, AliasMode::Resolve) => AliasPolicy::Resolve,
        (policy, _) => policy,
    };

    let mut groups: Groups<'_> = Groups::new();

    for token in tokens {
        let resolved = resolve(&token.value, map);

        let (value, target) = match policy {
            AliasPolicy::Raw => (token.value.clone(), None),
            AliasPolicy::Resolve => (resolved.clone(), None),
            AliasPolicy::SelfReference => (dialect.reference(&TokenRef::of(token)), None),
            AliasPolicy::Reference => match alias_target(&token.value) {
                Some(ref_path) => {
                    let target = reference_target(ref_path, map, &by_path, options);
                    (dialect.reference(&target), Some(target.name))
                }
                None => (token.value.clone(), None),
            },
        };

        groups.entry(dialect.group(token)).or_default().push(Entry {
            token,
            value,
            resolved,
            target,
        });
    }

    tracing::trace!(tokens = tokens.len(), groups = groups.len(), "emitting tokens");
    dialect.render(&groups, &options.indent_str())
}

/// 找到别名直接指向的 token
///
/// 先按 token map 查找（含后缀回退）再映射回扁平记录，保证引用的变量名真实存在；
/// 找不到时按别名路径本身命名
fn reference_target(
    ref_path: &str,
    map: &TokenMap,
    by_path: &HashMap<&str, &FlatToken>,
    options: &ExportOptions,
) -> TokenRef {
    lookup_alias_target(ref_path, map)
        .and_then(|(key, _)| by_path.get(key))
        .map(|token| TokenRef::of(token))
        .unwrap_or_else(|| {
            tracing::debug!(alias = ref_path, "alias target not found, naming from path");
            TokenRef {
                name: to_slug(ref_path),
                css_variable: to_css_variable(ref_path, options.prefix.as_deref()),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::CssDialect;
    use ftd_core::{build_token_map, flatten_with_prefix, TokenDocument};
    use serde_json::json;

    fn sample() -> TokenDocument {
        TokenDocument::from_value(&json!({
            "Foundation/Value": {
                "base": { "blue": { "500": { "value": "#3b82f6", "type": "color" } } }
            },
            "Semantic/Value": {
                "fill": {
                    "primary": { "value": "{base.blue.500}", "type": "color" },
                    "broken": { "value": "{does.not.exist}", "type": "color" }
                }
            },
            "Components/Button": {
                "button": { "bg": { "value": "{fill.primary}", "type": "color" } }
            }
        }))
    }

    fn emit_css(doc: &TokenDocument, options: &ExportOptions) -> String {
        let tokens = flatten_with_prefix(doc, options.prefix.as_deref());
        emit(&CssDialect, &tokens, &build_token_map(doc), options)
    }

    #[test]
    fn test_reference_points_at_direct_target() {
        let css = emit_css(&sample(), &ExportOptions::default());
        assert!(css.contains("--button-bg: var(--fill-primary);"));
        assert!(css.contains("--fill-primary: var(--base-blue-500);"));
    }

    #[test]
    fn test_missing_target_named_from_path() {
        let css = emit_css(&sample(), &ExportOptions::default());
        assert!(css.contains("--fill-broken: var(--does-not-exist);"));
    }

    #[test]
    fn test_reference_records_target_name() {
        let doc = sample();
        let tokens = flatten_with_prefix(&doc, None);
        let map = build_token_map(&doc);
        let options = ExportOptions::default();

        struct Capture;
        impl Dialect for Capture {
            fn alias_policy(&self) -> AliasPolicy {
                AliasPolicy::Reference
            }
            fn reference(&self, target: &TokenRef) -> String {
                target.name.clone()
            }
            fn render(&self, groups: &Groups<'_>, _indent: &str) -> String {
                groups
                    .values()
                    .flatten()
                    .map(|e| format!("{}>{}", e.token.name, e.target.as_deref().unwrap_or("-")))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }

        assert_eq!(
            emit(&Capture, &tokens, &map, &options),
            "base-blue-500>- fill-primary>base-blue-500 fill-broken>does-not-exist button-bg>fill-primary"
        );
    }

    #[test]
    fn test_resolve_mode_inlines_literals() {
        let options = ExportOptions {
            alias_mode: AliasMode::Resolve,
            ..Default::default()
        };
        let css = emit_css(&sample(), &options);
        assert!(css.contains("--button-bg: #3b82f6;"));
        assert!(css.contains("--fill-broken: {does.not.exist};"));
    }

    #[test]
    fn test_prefix_applies_to_references() {
        let css = emit_css(&sample(), &ExportOptions::with_prefix("ftd"));
        assert!(css.contains("--ftd-fill-primary: var(--ftd-base-blue-500);"));
        assert!(css.contains("--ftd-fill-broken: var(--ftd-does-not-exist);"));
    }
}
