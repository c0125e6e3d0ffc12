use ftd_core::TokenDocument;
use ftd_export::{
    generate, generate_css, generate_js, generate_scss, generate_tailwind, AliasMode,
    ExportFormat, ExportOptions,
};
use pretty_assertions::assert_eq;

const TOKENS: &str = r##"{
    "Foundation/Value": {
        "base": {
            "blue": {
                "50": { "value": "#3b82f6", "type": "color" }
            },
            "space": {
                "md": { "value": "16px", "type": "dimension" }
            }
        }
    },
    "Semantic/Value": {
        "fill": {
            "primary": { "value": "{base.blue.50}", "type": "color" }
        }
    }
}"##;

fn load() -> TokenDocument {
    TokenDocument::from_json(TOKENS).expect("Failed to load tokens")
}

#[test]
fn test_css_alias_fidelity() {
    let css = generate_css(&load());
    assert!(css.contains(":root {"));
    assert!(css.contains("--base-blue-50: #3b82f6;"));
    assert!(css.contains("--fill-primary: var(--base-blue-50);"));
}

#[test]
fn test_css_without_token_sets() {
    let doc = TokenDocument::from_json(
        r##"{
            "base": { "blue": { "50": { "value": "#3b82f6", "type": "color" } } },
            "fill": { "primary": { "value": "{base.blue.50}", "type": "color" } }
        }"##,
    )
    .unwrap();

    let css = generate_css(&doc);
    assert!(css.contains("--base-blue-50: #3b82f6;"));
    assert!(css.contains("--fill-primary: var(--base-blue-50);"));
}

#[test]
fn test_scss_variables_and_map() {
    let scss = generate_scss(&load());
    assert!(scss.contains("$base-blue-50: #3b82f6;"));
    assert!(scss.contains("$fill-primary: $base-blue-50;"));
    assert!(scss.contains("$tokens: ("));
    assert!(scss.contains("\"base-blue-50\": #3b82f6"));
    assert!(scss.contains("\"fill-primary\": #3b82f6"));
}

#[test]
fn test_tailwind_extend() {
    let tw = generate_tailwind(&load());
    assert!(tw.contains("\"extend\": {"));
    assert!(tw.contains("\"colors\": {"));
    assert!(tw.contains("\"base-blue-50\": \"var(--base-blue-50)\""));
    assert!(tw.contains("\"fill-primary\": \"var(--fill-primary)\""));
}

#[test]
fn test_js_keeps_raw_aliases() {
    let js = generate_js(&load());
    assert!(js.contains("export const tokens = {"));
    assert!(js.contains("\"base-blue-50\": \"#3b82f6\""));
    assert!(js.contains("\"fill-primary\": \"{base.blue.50}\""));
}

#[test]
fn test_js_ignores_resolve_mode() {
    let options = ExportOptions {
        alias_mode: AliasMode::Resolve,
        ..Default::default()
    };
    let js = generate(ExportFormat::Js, &load(), &options);
    assert!(js.contains("\"fill-primary\": \"{base.blue.50}\""));

    let scss = generate(ExportFormat::Scss, &load(), &options);
    assert!(scss.contains("$fill-primary: #3b82f6;"));
}

#[test]
fn test_partial_document_is_well_formed() {
    let partial = TokenDocument::from_json(r##"{ "Foundation/Value": {} }"##).unwrap();
    assert!(generate_css(&partial).contains(":root {\n}"));
    assert_eq!(generate_js(&partial), "export const tokens = {\n};\n");
}

#[test]
fn test_cyclic_aliases_do_not_hang() {
    let doc = TokenDocument::from_json(
        r##"{
            "a": { "value": "{b}", "type": "color" },
            "b": { "value": "{a}", "type": "color" }
        }"##,
    )
    .unwrap();

    let css = generate_css(&doc);
    assert!(css.contains("--a: var(--b);"));
    assert!(css.contains("--b: var(--a);"));

    let scss = generate_scss(&doc);
    // 10 跳后停在 a 自己的原始值，以字符串写出
    assert!(scss.contains("\"a\": \"{b}\""));
    assert!(scss.contains("$a: \"{b}\";"));
    assert!(!scss.contains("$a: $b;"));
}

#[test]
fn test_scss_declares_targets_before_aliases() {
    let doc = TokenDocument::from_json(
        r##"{
            "fill": { "primary": { "value": "{base.blue.50}", "type": "color" } },
            "base": { "blue": { "50": { "value": "#3b82f6", "type": "color" } } }
        }"##,
    )
    .unwrap();

    let scss = generate_scss(&doc);
    let target = scss.find("$base-blue-50: #3b82f6;").expect("target declared");
    let alias = scss.find("$fill-primary: $base-blue-50;").expect("alias declared");
    assert!(target < alias);

    // map 保持文档顺序
    let map_start = scss.find("$tokens: (").unwrap();
    let map = &scss[map_start..];
    assert!(map.find("\"fill-primary\"").unwrap() < map.find("\"base-blue-50\"").unwrap());
}

#[test]
fn test_scss_alias_chain_out_of_order() {
    let doc = TokenDocument::from_json(
        r##"{
            "button": { "bg": { "value": "{fill.primary}", "type": "color" } },
            "fill": { "primary": { "value": "{base.blue.50}", "type": "color" } },
            "base": { "blue": { "50": { "value": "#3b82f6", "type": "color" } } }
        }"##,
    )
    .unwrap();

    let scss = generate_scss(&doc);
    assert!(scss.starts_with(
        "$base-blue-50: #3b82f6;\n$fill-primary: $base-blue-50;\n$button-bg: $fill-primary;\n"
    ));
}

#[test]
fn test_scss_missing_target_is_not_referenced() {
    let doc = TokenDocument::from_json(
        r##"{ "fill": { "broken": { "value": "{does.not.exist}", "type": "color" } } }"##,
    )
    .unwrap();

    let scss = generate_scss(&doc);
    assert!(scss.contains("$fill-broken: \"{does.not.exist}\";"));
    assert!(!scss.contains("$does-not-exist"));
}

#[test]
fn test_composite_values_are_not_aliases() {
    let doc = TokenDocument::from_json(
        r##"{
            "typography": {
                "body": {
                    "value": { "fontFamily": "Inter", "fontSize": "16px" },
                    "type": "typography"
                }
            },
            "space": { "md": { "value": "16px", "type": "dimension" } }
        }"##,
    )
    .unwrap();

    let css = generate_css(&doc);
    assert!(!css.contains("var(--"));
    assert!(!css.contains("typography-body"));
    assert!(css.contains("--space-md: 16px;"));
}

#[test]
fn test_null_values_are_dropped() {
    let doc = TokenDocument::from_json(
        r##"{
            "x": { "value": null, "type": "color" },
            "y": { "value": "#fff", "type": "color" }
        }"##,
    )
    .unwrap();

    let css = generate_css(&doc);
    assert!(!css.contains("null"));
    assert_eq!(css, ":root {\n  --y: #fff;\n}\n");
}

#[test]
fn test_generation_is_deterministic() {
    let doc = load();
    for format in ExportFormat::ALL {
        let options = ExportOptions::default();
        assert_eq!(
            generate(format, &doc, &options),
            generate(format, &doc, &options)
        );
    }
}
