use super::{AliasPolicy, Dialect, Groups, TokenRef};

/// `:root { --name: value; }`
pub struct CssDialect;

impl Dialect for CssDialect {
    fn alias_policy(&self) -> AliasPolicy {
        AliasPolicy::Reference
    }

    fn reference(&self, target: &TokenRef) -> String {
        format!("var({})", target.css_variable)
    }

    fn render(&self, groups: &Groups<'_>, indent: &str) -> String {
        let mut css = String::from(":root {\n");
        for entry in groups.values().flatten() {
            css.push_str(&format!(
                "{}{}: {};\n",
                indent, entry.token.css_variable, entry.value
            ));
        }
        css.push_str("}\n");
        css
    }
}
