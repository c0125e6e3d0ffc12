use super::{quote, AliasPolicy, Dialect, Groups, TokenRef};
use ftd_core::FlatToken;
use phf::phf_map;

/// token 类型 → Tailwind theme 分类
static CATEGORY_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "color" => "colors",

    // 尺寸
    "spacing" => "spacing",
    "sizing" => "spacing",
    "dimension" => "spacing",

    // 边框
    "borderRadius" => "borderRadius",
    "radius" => "borderRadius",
    "borderWidth" => "borderWidth",

    // 字体（Tokens Studio 使用复数形式）
    "fontSizes" => "fontSize",
    "fontSize" => "fontSize",
    "fontFamilies" => "fontFamily",
    "fontFamily" => "fontFamily",
    "fontWeights" => "fontWeight",
    "fontWeight" => "fontWeight",
    "lineHeights" => "lineHeight",
    "lineHeight" => "lineHeight",
    "letterSpacing" => "letterSpacing",

    "boxShadow" => "boxShadow",
    "opacity" => "opacity",
};

/// 根据 token 类型推断 Tailwind 分类
///
/// 名称含 radius 的 `dimension` 归入 borderRadius；未知类型直接用类型名
pub fn tailwind_category(token: &FlatToken) -> String {
    if token.token_type == "dimension" && token.name.contains("radius") {
        return "borderRadius".to_string();
    }
    if let Some(&category) = CATEGORY_MAP.get(token.token_type.as_str()) {
        return category.to_string();
    }
    if token.token_type.is_empty() {
        "other".to_string()
    } else {
        token.token_type.clone()
    }
}

/// `module.exports = { "theme": { "extend": { ... } } };`
///
/// 每个 token 都引用自己的 CSS 变量，需配合 CSS 导出一起使用
pub struct TailwindDialect;

impl Dialect for TailwindDialect {
    fn alias_policy(&self) -> AliasPolicy {
        AliasPolicy::SelfReference
    }

    fn reference(&self, target: &TokenRef) -> String {
        format!("var({})", target.css_variable)
    }

    fn group(&self, token: &FlatToken) -> Option<String> {
        Some(tailwind_category(token))
    }

    fn render(&self, groups: &Groups<'_>, indent: &str) -> String {
        let i1 = indent;
        let i2 = indent.repeat(2);
        let i3 = indent.repeat(3);
        let i4 = indent.repeat(4);

        let mut out = String::from("module.exports = {\n");
        out.push_str(&format!("{}\"theme\": {{\n", i1));

        if groups.is_empty() {
            out.push_str(&format!("{}\"extend\": {{}}\n", i2));
        } else {
            out.push_str(&format!("{}\"extend\": {{\n", i2));

            let categories: Vec<String> = groups
                .iter()
                .map(|(category, entries)| {
                    let body: Vec<String> = entries
                        .iter()
                        .map(|e| format!("{}{}: {}", i4, quote(&e.token.name), quote(&e.value)))
                        .collect();
                    format!(
                        "{}{}: {{\n{}\n{}}}",
                        i3,
                        quote(category.as_deref().unwrap_or("other")),
                        body.join(",\n"),
                        i3
                    )
                })
                .collect();

            out.push_str(&categories.join(",\n"));
            out.push_str(&format!("\n{}}}\n", i2));
        }

        out.push_str(&format!("{}}}\n", i1));
        out.push_str("};\n");
        out
    }
}
