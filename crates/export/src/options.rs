use serde::{Deserialize, Serialize};

/// 导出目标格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    Css,
    Scss,
    Tailwind,
    Js,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Tailwind,
        ExportFormat::Js,
    ];

    /// 建议的输出文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Css => "tokens.css",
            ExportFormat::Scss => "_tokens.scss",
            ExportFormat::Tailwind => "tailwind.tokens.js",
            ExportFormat::Js => "tokens.js",
        }
    }
}

/// 别名输出模式（仅影响支持符号引用的格式：CSS / SCSS 变量声明）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AliasMode {
    /// 别名输出为引用：`var(--base-blue-50)` / `$base-blue-50`
    #[default]
    Reference,
    /// 别名输出为解析后的字面值
    Resolve,
}

/// 导出选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    /// CSS 变量前缀（`ftd` → `--ftd-base-blue-50`）
    pub prefix: Option<String>,
    /// 别名输出模式（默认 Reference）
    pub alias_mode: AliasMode,
    /// 缩进空格数（默认 2）
    pub indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            alias_mode: AliasMode::Reference,
            indent: 2,
        }
    }
}

impl ExportOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Default::default()
        }
    }

    pub(crate) fn indent_str(&self) -> String {
        " ".repeat(self.indent)
    }
}
