use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 叶子 token：`{ value, type }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 字面值（如 "#3b82f6"、"16px"）或别名（如 "{base.blue.500}"）
    pub value: String,
    /// 语义类型（color / dimension / spacing / borderRadius ...）
    #[serde(rename = "type")]
    pub token_type: String,
}

impl Token {
    pub fn new(value: impl Into<String>, token_type: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            token_type: token_type.into(),
        }
    }

    /// 只接受标量值；null 和复合值（typography / boxShadow 等对象、数组）返回 `None`
    fn from_object(obj: &Map<String, Value>) -> Option<Self> {
        let value = obj.get("value").and_then(scalar_text)?;
        Some(Self {
            value,
            token_type: obj.get("type").and_then(scalar_text).unwrap_or_default(),
        })
    }
}

/// 标量值的文本形式，数字和布尔按 JSON 文本保存（16 → "16"）
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// token 树节点
///
/// 每个节点只在构建时判定一次：满足叶子谓词即为 `Leaf`，否则为 `Group`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(Token),
    Group(IndexMap<String, TokenNode>),
}

impl TokenNode {
    /// 从 JSON 节点构建
    ///
    /// null、数组和原始值不是合法节点，值为 null 或复合值的叶子也不是，
    /// 均返回 `None`（由调用方静默跳过）
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        if is_token_value(value) {
            return Token::from_object(obj).map(TokenNode::Leaf);
        }

        let children = obj
            .iter()
            .filter_map(|(key, child)| {
                let node = TokenNode::from_value(child);
                if node.is_none() {
                    tracing::debug!(key = %key, "skipping malformed token node");
                }
                node.map(|n| (key.clone(), n))
            })
            .collect();

        Some(TokenNode::Group(children))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TokenNode::Leaf(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TokenNode::Leaf(token) => Some(token),
            TokenNode::Group(_) => None,
        }
    }

    /// 直接子节点（叶子没有子节点）
    pub fn child(&self, key: &str) -> Option<&TokenNode> {
        match self {
            TokenNode::Group(children) => children.get(key),
            TokenNode::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        let children = match self {
            TokenNode::Group(children) => Some(children),
            TokenNode::Leaf(_) => None,
        };
        children
            .into_iter()
            .flat_map(|c| c.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

/// 判断 JSON 节点是否为叶子 token（同时拥有 `value` 和 `type`）
///
/// 对 null 或非对象输入返回 false，不会 panic
pub fn is_token_value(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("value") && obj.contains_key("type"))
}

/// 扁平化后的 token 记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatToken {
    /// 连字符 slug（如 "base-blue-50"）
    pub name: String,
    /// 原始值（别名保持 "{...}" 形式）
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: String,
    /// CSS 自定义属性名（如 "--base-blue-50"）
    pub css_variable: String,
    /// 对应 token map 中的完整路径
    pub path: String,
}

impl FlatToken {
    pub fn is_alias(&self) -> bool {
        crate::resolve::is_alias(&self.value)
    }
}
