use crate::dialect::create_dialect;
use crate::emit::emit;
use crate::options::{ExportFormat, ExportOptions};
use ftd_core::{build_token_map, flatten_with_prefix, TokenDocument};
use indexmap::IndexMap;

/// 按指定格式生成代码
///
/// 输出是完整的文件内容，空文档也得到语法合法的结果
pub fn generate(format: ExportFormat, document: &TokenDocument, options: &ExportOptions) -> String {
    let tokens = flatten_with_prefix(document, options.prefix.as_deref());
    let map = build_token_map(document);
    let dialect = create_dialect(format);
    emit(dialect.as_ref(), &tokens, &map, options)
}

/// 一次生成全部格式（导出面板使用）
pub fn generate_all(
    document: &TokenDocument,
    options: &ExportOptions,
) -> IndexMap<ExportFormat, String> {
    ExportFormat::ALL
        .iter()
        .map(|&format| (format, generate(format, document, options)))
        .collect()
}

/// `:root { --name: value; }`，别名输出为 `var(--target)`
pub fn generate_css(document: &TokenDocument) -> String {
    generate(ExportFormat::Css, document, &ExportOptions::default())
}

/// SCSS 变量 + `$tokens` map
pub fn generate_scss(document: &TokenDocument) -> String {
    generate(ExportFormat::Scss, document, &ExportOptions::default())
}

/// Tailwind `theme.extend` 配置片段
pub fn generate_tailwind(document: &TokenDocument) -> String {
    generate(ExportFormat::Tailwind, document, &ExportOptions::default())
}

/// JS 对象，值保持原始形式
pub fn generate_js(document: &TokenDocument) -> String {
    generate(ExportFormat::Js, document, &ExportOptions::default())
}
