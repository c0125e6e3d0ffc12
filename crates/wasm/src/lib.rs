use wasm_bindgen::prelude::*;
use serde::Serialize;

use ftd_core::categorize::categorize_sets;
use ftd_core::color::{contrast_color, parse_color_families};
use ftd_core::scale::{parse_numeric_value, parse_scale};
use ftd_core::{
    build_token_map, flatten_with_prefix, is_alias as rs_is_alias, is_token_value as rs_is_token_value,
    resolve, to_css_variable as rs_to_css_variable, TokenDocument, TokenMap,
};
use ftd_export::{generate, ExportFormat, ExportOptions};
use ftd_search::{
    highlight_match as rs_highlight_match, index_tokens as rs_index_tokens,
    search_tokens_with, IndexEntry, SearchOptions,
};

// ── 输入解析 ──────────────────────────────────────────────────

fn parse_document(tokens: JsValue) -> Result<TokenDocument, JsError> {
    if tokens.is_undefined() || tokens.is_null() {
        return Ok(TokenDocument::default());
    }
    let value: serde_json::Value = serde_wasm_bindgen::from_value(tokens)
        .map_err(|e| JsError::new(&format!("Invalid tokens: {}", e)))?;
    Ok(TokenDocument::from_value(&value))
}

fn parse_token_map(token_map: JsValue) -> Result<TokenMap, JsError> {
    if token_map.is_undefined() || token_map.is_null() {
        return Ok(TokenMap::new());
    }
    serde_wasm_bindgen::from_value(token_map)
        .map_err(|e| JsError::new(&format!("Invalid token map: {}", e)))
}

fn parse_export_options(options: JsValue) -> Result<ExportOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(ExportOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn parse_search_options(options: JsValue) -> Result<SearchOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(SearchOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// @returns 节点是否为 `{ value, type }` 叶子 token
#[wasm_bindgen(js_name = "isTokenValue")]
pub fn is_token_value(node: JsValue) -> bool {
    serde_wasm_bindgen::from_value::<serde_json::Value>(node)
        .map(|value| rs_is_token_value(&value))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = "isAlias")]
pub fn is_alias(value: &str) -> bool {
    rs_is_alias(value)
}

/// 构建 token map
///
/// @param tokens - token 文档
/// @returns `{ [fullPath]: rawValue }`
#[wasm_bindgen(js_name = "buildTokenMap")]
pub fn build_token_map_js(tokens: JsValue) -> Result<JsValue, JsError> {
    let doc = parse_document(tokens)?;
    to_js(&build_token_map(&doc))
}

/// 解析别名（最大 10 跳），无法解析时原样返回
#[wasm_bindgen(js_name = "resolveTokenValue")]
pub fn resolve_token_value(value: &str, token_map: JsValue) -> Result<String, JsError> {
    let map = parse_token_map(token_map)?;
    Ok(resolve(value, &map))
}

#[wasm_bindgen(js_name = "toCssVariable")]
pub fn to_css_variable(path: &str, prefix: Option<String>) -> String {
    rs_to_css_variable(path, prefix.as_deref())
}

/// @returns `{ name, value, type, cssVariable, path }[]`
#[wasm_bindgen(js_name = "getFlattenedTokens")]
pub fn get_flattened_tokens(tokens: JsValue, prefix: Option<String>) -> Result<JsValue, JsError> {
    let doc = parse_document(tokens)?;
    to_js(&flatten_with_prefix(&doc, prefix.as_deref()))
}

/// 文档内容指纹，可作为 token map / 索引的缓存键
#[wasm_bindgen(js_name = "documentFingerprint")]
pub fn document_fingerprint(tokens: JsValue) -> Result<String, JsError> {
    Ok(parse_document(tokens)?.fingerprint())
}

// ── 搜索 ──────────────────────────────────────────────────────

/// @returns `{ token, searchableText }[]`
#[wasm_bindgen(js_name = "indexTokens")]
pub fn index_tokens(tokens: JsValue) -> Result<JsValue, JsError> {
    let doc = parse_document(tokens)?;
    to_js(&rs_index_tokens(&doc))
}

/// @param query   - 查询串
/// @param index   - `indexTokens` 的结果
/// @param options - `{ limit? }`，可选
/// @returns `{ token, rank, position }[]`
#[wasm_bindgen(js_name = "searchTokens")]
pub fn search_tokens(query: &str, index: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let index: Vec<IndexEntry> = serde_wasm_bindgen::from_value(index)
        .map_err(|e| JsError::new(&format!("Invalid index: {}", e)))?;
    let options = parse_search_options(options)?;
    to_js(&search_tokens_with(query, &index, &options))
}

#[wasm_bindgen(js_name = "highlightMatch")]
pub fn highlight_match(text: &str, query: &str) -> String {
    rs_highlight_match(text, query)
}

// ── 代码生成 ──────────────────────────────────────────────────

fn generate_with(format: ExportFormat, tokens: JsValue, options: JsValue) -> Result<String, JsError> {
    let doc = parse_document(tokens)?;
    let options = parse_export_options(options)?;
    Ok(generate(format, &doc, &options))
}

/// @param options - `{ prefix?, aliasMode?: "reference" | "resolve", indent? }`，可选
#[wasm_bindgen(js_name = "generateCss")]
pub fn generate_css(tokens: JsValue, options: JsValue) -> Result<String, JsError> {
    generate_with(ExportFormat::Css, tokens, options)
}

#[wasm_bindgen(js_name = "generateScss")]
pub fn generate_scss(tokens: JsValue, options: JsValue) -> Result<String, JsError> {
    generate_with(ExportFormat::Scss, tokens, options)
}

#[wasm_bindgen(js_name = "generateTailwind")]
pub fn generate_tailwind(tokens: JsValue, options: JsValue) -> Result<String, JsError> {
    generate_with(ExportFormat::Tailwind, tokens, options)
}

#[wasm_bindgen(js_name = "generateJs")]
pub fn generate_js(tokens: JsValue, options: JsValue) -> Result<String, JsError> {
    generate_with(ExportFormat::Js, tokens, options)
}

/// @param format - "css" | "scss" | "tailwind" | "js"
#[wasm_bindgen(js_name = "generateExport")]
pub fn generate_export(format: JsValue, tokens: JsValue, options: JsValue) -> Result<String, JsError> {
    let format: ExportFormat = serde_wasm_bindgen::from_value(format)
        .map_err(|e| JsError::new(&format!("Invalid format: {}", e)))?;
    generate_with(format, tokens, options)
}

// ── 文档页面辅助 ──────────────────────────────────────────────

/// @returns `"black" | "white"`
#[wasm_bindgen(js_name = "getContrastColor")]
pub fn get_contrast_color(hex: &str) -> String {
    contrast_color(hex).as_str().to_string()
}

#[wasm_bindgen(js_name = "parseNumericValue")]
pub fn parse_numeric_value_js(value: &str) -> Option<f64> {
    parse_numeric_value(value)
}

/// @returns `{ colors?: string[], spacing?: string[], sizes?: string[], radius?: string[], other?: string[] }`
#[wasm_bindgen(js_name = "detectTokenSets")]
pub fn detect_token_sets(tokens: JsValue) -> Result<JsValue, JsError> {
    let doc = parse_document(tokens)?;
    to_js(&categorize_sets(&doc))
}

/// @param key - 顶层条目名（如 "Size/Value"）
/// @returns 按数值升序的 `{ name, value, resolvedValue, numericValue, cssVariable }[]`
#[wasm_bindgen(js_name = "parseScale")]
pub fn parse_scale_js(tokens: JsValue, key: &str) -> Result<JsValue, JsError> {
    let doc = parse_document(tokens)?;
    let map = build_token_map(&doc);
    to_js(&parse_scale(&doc, key, &map))
}

/// @returns `{ name, shades: { name, value, resolvedValue, cssVariable }[] }[]`
#[wasm_bindgen(js_name = "parseColorFamilies")]
pub fn parse_color_families_js(tokens: JsValue) -> Result<JsValue, JsError> {
    let doc = parse_document(tokens)?;
    let map = build_token_map(&doc);
    to_js(&parse_color_families(&doc, &map))
}
