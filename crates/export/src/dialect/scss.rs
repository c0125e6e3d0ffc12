use super::{quote, AliasPolicy, Dialect, Entry, Groups, TokenRef};
use ftd_core::is_alias;
use std::collections::HashSet;

/// `$name: value;` 变量声明 + 末尾的 `$tokens: (...)` map
///
/// 变量声明保留别名引用，map 始终使用解析后的字面值
pub struct ScssDialect;

/// 含逗号的值（如字体列表）在 map 中需要括起来，否则会被拆成多个元素；
/// 仍是别名形式的值（循环或找不到目标）输出为字符串
fn map_value(value: &str) -> String {
    if is_alias(value) {
        quote(value)
    } else if value.contains(',') {
        format!("({})", value)
    } else {
        value.to_string()
    }
}

/// 按依赖顺序排列变量声明
///
/// Sass 变量必须先声明后使用：引用其他变量的声明排在目标之后，
/// 其余保持文档顺序。循环或目标不存在的声明最后输出，且不再引用变量
fn declarations(groups: &Groups<'_>) -> Vec<(String, String)> {
    let mut pending: Vec<&Entry<'_>> = groups.values().flatten().collect();
    let mut declared: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::with_capacity(pending.len());

    loop {
        let before = pending.len();
        pending.retain(|entry| {
            let ready = entry
                .target
                .as_deref()
                .map_or(true, |target| declared.contains(target));
            if ready {
                declared.insert(entry.token.name.as_str());
                ordered.push((entry.token.name.clone(), entry.value.clone()));
            }
            !ready
        });
        if pending.is_empty() || pending.len() == before {
            break;
        }
    }

    for entry in pending {
        tracing::debug!(token = %entry.token.name, "scss declaration has no declarable target");
        ordered.push((entry.token.name.clone(), map_value(&entry.resolved)));
    }
    ordered
}

impl Dialect for ScssDialect {
    fn alias_policy(&self) -> AliasPolicy {
        AliasPolicy::Reference
    }

    fn reference(&self, target: &TokenRef) -> String {
        format!("${}", target.name)
    }

    fn render(&self, groups: &Groups<'_>, indent: &str) -> String {
        let mut scss = String::new();

        for (name, value) in declarations(groups) {
            scss.push_str(&format!("${}: {};\n", name, value));
        }

        let pairs: Vec<String> = groups
            .values()
            .flatten()
            .map(|entry| {
                format!(
                    "{}{}: {}",
                    indent,
                    quote(&entry.token.name),
                    map_value(&entry.resolved)
                )
            })
            .collect();

        if pairs.is_empty() {
            scss.push_str("$tokens: ();\n");
            return scss;
        }

        if !scss.is_empty() {
            scss.push('\n');
        }
        scss.push_str("$tokens: (\n");
        scss.push_str(&pairs.join(",\n"));
        scss.push_str("\n);\n");
        scss
    }
}
