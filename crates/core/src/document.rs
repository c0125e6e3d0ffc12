use crate::types::{Token, TokenNode};
use indexmap::IndexMap;
use serde_json::Value;

/// 所有遍历都忽略的顶层保留键
static RESERVED_KEYS: phf::Set<&'static str> = phf::phf_set! {
    "global",
    "$themes",
    "$metadata",
};

pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(key)
}

/// 文档加载错误
///
/// 只有输入解码会失败；数据形状问题（null 叶子、坏别名）一律静默降级
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Token 文档
///
/// 保存去掉保留键后的顶层条目（保持文档顺序），以及其中哪些键是 token set。
///
/// token set（如 `"Foundation/Value"`）只是结构上的包装：
/// 扁平化时名称从 set 之下开始计算，token map 则保留完整路径。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenDocument {
    root: IndexMap<String, TokenNode>,
    sets: Vec<String>,
}

impl TokenDocument {
    /// 从已解析的 JSON 构建
    ///
    /// 非对象输入视为空文档
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let root: IndexMap<String, TokenNode> = obj
            .iter()
            .filter(|(key, _)| !is_reserved_key(key))
            .filter_map(|(key, child)| TokenNode::from_value(child).map(|n| (key.clone(), n)))
            .collect();

        let sets = detect_set_keys(value, &root);

        tracing::trace!(entries = root.len(), sets = sets.len(), "loaded token document");

        Self { root, sets }
    }

    /// 从 JSON 字符串加载
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(json_str)?;
        if !value.is_object() {
            return Err(LoadError::NotAnObject {
                found: json_kind(&value),
            });
        }
        Ok(Self::from_value(&value))
    }

    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.root.get(key)
    }

    /// 顶层条目（不含保留键）
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.root.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.sets.iter().any(|s| s == key)
    }

    pub fn set_keys(&self) -> &[String] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// 深度优先遍历所有叶子 token（文档顺序）
    pub fn walk<V: TokenVisitor>(&self, visitor: &mut V) {
        for (key, node) in &self.root {
            let mut path = TokenPath {
                segments: vec![key.as_str()],
                set_len: usize::from(self.is_set(key)),
            };
            walk_node(node, &mut path, visitor);
        }
    }

    /// 内容指纹，用于调用方按文档缓存 token map / 搜索索引
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for set in &self.sets {
            hasher.update(b"set\0");
            hasher.update(set.as_bytes());
        }
        self.walk(&mut |path: &TokenPath<'_>, token: &Token| {
            for segment in path.segments() {
                hasher.update(segment.as_bytes());
                hasher.update(b"\0");
            }
            hasher.update(token.value.as_bytes());
            hasher.update(b"\0");
            hasher.update(token.token_type.as_bytes());
            hasher.update(b"\n");
        });
        hasher.finalize().to_hex().to_string()
    }
}

/// 遍历中的叶子路径
pub struct TokenPath<'a> {
    segments: Vec<&'a str>,
    /// 开头属于 token set 的段数（0 或 1）
    set_len: usize,
}

impl<'a> TokenPath<'a> {
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// set 之下的路径段
    pub fn local_segments(&self) -> &[&'a str] {
        &self.segments[self.set_len..]
    }

    /// 完整路径（token map 的键）
    pub fn full(&self) -> String {
        self.segments.join(".")
    }

    /// set 之下的路径（扁平化命名使用）
    pub fn local(&self) -> String {
        self.local_segments().join(".")
    }
}

/// 叶子访问者
pub trait TokenVisitor {
    fn visit_leaf(&mut self, path: &TokenPath<'_>, token: &Token);
}

impl<F> TokenVisitor for F
where
    F: FnMut(&TokenPath<'_>, &Token),
{
    fn visit_leaf(&mut self, path: &TokenPath<'_>, token: &Token) {
        self(path, token)
    }
}

fn walk_node<'a, V: TokenVisitor>(node: &'a TokenNode, path: &mut TokenPath<'a>, visitor: &mut V) {
    match node {
        TokenNode::Leaf(token) => visitor.visit_leaf(path, token),
        TokenNode::Group(children) => {
            for (key, child) in children {
                path.segments.push(key.as_str());
                walk_node(child, path, visitor);
                path.segments.pop();
            }
        }
    }
}

/// 识别 token set 键
///
/// 优先使用 `$metadata.tokenSetOrder`；没有时把含 `/` 的顶层组视为 set
fn detect_set_keys(value: &Value, root: &IndexMap<String, TokenNode>) -> Vec<String> {
    let is_group = |key: &str| root.get(key).is_some_and(|n| !n.is_leaf());

    let declared = value
        .get("$metadata")
        .and_then(|m| m.get("tokenSetOrder"))
        .and_then(Value::as_array);

    match declared {
        Some(order) => order
            .iter()
            .filter_map(Value::as_str)
            .filter(|key| is_group(*key))
            .map(str::to_string)
            .collect(),
        None => root
            .keys()
            .filter(|key| key.contains('/') && is_group(key.as_str()))
            .cloned()
            .collect(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
