//! 目标格式方言
//!
//! 每种格式只描述自己的语法：别名策略、引用写法、分组规则和最终排版。
//! 别名如何变成引用由 [`crate::emit`] 统一处理。

mod css;
mod js;
mod scss;
mod tailwind;

pub use css::CssDialect;
pub use js::JsDialect;
pub use scss::ScssDialect;
pub use tailwind::{tailwind_category, TailwindDialect};

use crate::options::ExportFormat;
use ftd_core::FlatToken;
use indexmap::IndexMap;

/// 别名策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasPolicy {
    /// 别名输出为对目标 token 的引用，字面值原样输出
    Reference,
    /// 每个 token 都输出为对自身变量的引用
    SelfReference,
    /// 输出解析后的字面值
    Resolve,
    /// 输出原始值（别名保持 `{...}` 形式）
    Raw,
}

/// 被引用的 token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRef {
    pub name: String,
    pub css_variable: String,
}

impl TokenRef {
    pub fn of(token: &FlatToken) -> Self {
        Self {
            name: token.name.clone(),
            css_variable: token.css_variable.clone(),
        }
    }
}

/// 发射器为每个 token 准备好的输出数据
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub token: &'a FlatToken,
    /// 按别名策略得到的值
    pub value: String,
    /// 始终是解析后的字面值
    pub resolved: String,
    /// `value` 引用的 token 名（仅 Reference 策略下的别名）
    pub target: Option<String>,
}

/// 分组键 → 条目（保持首次出现顺序）；不分组的方言只有 `None` 一组
pub type Groups<'a> = IndexMap<Option<String>, Vec<Entry<'a>>>;

/// 目标格式方言
pub trait Dialect {
    fn alias_policy(&self) -> AliasPolicy;

    /// 引用写法，如 `var(--x)` / `$x`
    fn reference(&self, target: &TokenRef) -> String;

    /// 分组键
    fn group(&self, _token: &FlatToken) -> Option<String> {
        None
    }

    /// 排版成最终文本
    fn render(&self, groups: &Groups<'_>, indent: &str) -> String;
}

/// 根据格式创建对应的方言
pub fn create_dialect(format: ExportFormat) -> Box<dyn Dialect> {
    match format {
        ExportFormat::Css => Box::new(CssDialect),
        ExportFormat::Scss => Box::new(ScssDialect),
        ExportFormat::Tailwind => Box::new(TailwindDialect),
        ExportFormat::Js => Box::new(JsDialect),
    }
}

/// JSON 字符串字面量（JS / SCSS 键值共用）
pub(crate) fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
