use super::{quote, AliasPolicy, Dialect, Groups, TokenRef};

/// `export const tokens = { "name": "value", };`
///
/// 输出原始值：别名保持 `{...}` 形式，不做解析
pub struct JsDialect;

impl Dialect for JsDialect {
    fn alias_policy(&self) -> AliasPolicy {
        AliasPolicy::Raw
    }

    fn reference(&self, target: &TokenRef) -> String {
        quote(&target.name)
    }

    fn render(&self, groups: &Groups<'_>, indent: &str) -> String {
        let mut js = String::from("export const tokens = {\n");
        for entry in groups.values().flatten() {
            js.push_str(&format!(
                "{}{}: {},\n",
                indent,
                quote(&entry.token.name),
                quote(&entry.value)
            ));
        }
        js.push_str("};\n");
        js
    }
}
