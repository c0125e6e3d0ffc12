use crate::document::{TokenDocument, TokenPath};
use crate::naming::to_css_variable;
use crate::resolve::resolve;
use crate::token_map::TokenMap;
use crate::types::Token;
use indexmap::IndexMap;
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// 放在某背景色上的可读文字颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastColor {
    Black,
    White,
}

impl ContrastColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastColor::Black => "black",
            ContrastColor::White => "white",
        }
    }
}

/// 根据 YIQ 亮度选择对比色
///
/// 支持 `#rgb` / `#rrggbb`；无法解析时返回 Black
pub fn contrast_color(hex: &str) -> ContrastColor {
    let Ok(rgb) = hex.trim().parse::<Srgb<u8>>() else {
        return ContrastColor::Black;
    };

    let yiq = (u32::from(rgb.red) * 299 + u32::from(rgb.green) * 587 + u32::from(rgb.blue) * 114)
        / 1000;

    if yiq >= 128 {
        ContrastColor::Black
    } else {
        ContrastColor::White
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorShade {
    /// 色阶名（如 "500"）
    pub name: String,
    pub value: String,
    pub resolved_value: String,
    pub css_variable: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFamily {
    /// 色系名（如 "blue"）
    pub name: String,
    pub shades: Vec<ColorShade>,
}

/// 收集基础色板：`base.<family>.<shade>`
///
/// 按色系分组，色系和色阶都保持文档顺序
pub fn parse_color_families(document: &TokenDocument, map: &TokenMap) -> Vec<ColorFamily> {
    let mut families: IndexMap<String, Vec<ColorShade>> = IndexMap::new();

    document.walk(&mut |path: &TokenPath<'_>, token: &Token| {
        let [group, family, shade] = path.local_segments() else {
            return;
        };
        if *group != "base" || token.token_type != "color" {
            return;
        }

        families.entry(family.to_string()).or_default().push(ColorShade {
            name: shade.to_string(),
            value: token.value.clone(),
            resolved_value: resolve(&token.value, map),
            css_variable: to_css_variable(&path.local(), None),
        });
    });

    families
        .into_iter()
        .map(|(name, shades)| ColorFamily { name, shades })
        .collect()
}
