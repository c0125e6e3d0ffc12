use crate::token_map::TokenMap;

/// 别名链的最大跳数，超过即停止（用于打破循环引用）
pub const MAX_ALIAS_DEPTH: usize = 10;

/// 判断值是否为别名（`{...}` 形式）
pub fn is_alias(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('{') && value.ends_with('}')
}

/// 去掉花括号，返回别名指向的路径
pub fn alias_target(value: &str) -> Option<&str> {
    if is_alias(value) {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}

/// 单跳查找：别名路径 → (token map 键, 原始值)
///
/// 1. 精确匹配
/// 2. 后缀回退：第一个以 `.{ref_path}` 结尾的键（按 map 顺序）
///
/// 后缀回退是有意宽松的，用来容忍别名作者省略 token set 前缀
/// （`{base.blue.50}` 对应 `Foundation/Value.base.blue.50`）。
pub fn lookup_alias_target<'m>(ref_path: &str, map: &'m TokenMap) -> Option<(&'m str, &'m str)> {
    if ref_path.is_empty() {
        return None;
    }

    if let Some((key, value)) = map.get_key_value(ref_path) {
        return Some((key.as_str(), value.as_str()));
    }

    let found = map
        .iter()
        .find(|(key, _)| is_suffix_match(key, ref_path))
        .map(|(key, value)| (key.as_str(), value.as_str()));

    if let Some((key, _)) = found {
        tracing::debug!(alias = ref_path, key, "alias resolved by suffix match");
    }
    found
}

fn is_suffix_match(key: &str, ref_path: &str) -> bool {
    key.len() > ref_path.len()
        && key.ends_with(ref_path)
        && key.as_bytes()[key.len() - ref_path.len() - 1] == b'.'
}

/// 别名链迭代器，依次产出每一跳得到的值
///
/// 最多产出 `max_depth` 个值；遇到字面值或找不到目标时结束
pub struct AliasChain<'a> {
    map: &'a TokenMap,
    current: &'a str,
    remaining: usize,
}

impl<'a> AliasChain<'a> {
    pub fn new(value: &'a str, map: &'a TokenMap, max_depth: usize) -> Self {
        Self {
            map,
            current: value,
            remaining: max_depth,
        }
    }
}

impl<'a> Iterator for AliasChain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let ref_path = alias_target(self.current)?;

        if self.remaining == 0 {
            tracing::debug!(value = self.current, "alias chain hit max depth");
            return None;
        }

        let Some((_, next)) = lookup_alias_target(ref_path, self.map) else {
            tracing::debug!(alias = ref_path, "unresolvable alias");
            return None;
        };

        self.current = next;
        self.remaining -= 1;
        Some(next)
    }
}

/// 解析别名到最终值（最大深度 10）
///
/// - 字面值原样返回
/// - 多级别名在一次调用内解析完毕
/// - 无法解析时返回当前（仍是别名形式的）值
/// - 循环引用在 10 跳后停止，返回当时的值
pub fn resolve(value: &str, map: &TokenMap) -> String {
    resolve_with_depth(value, map, MAX_ALIAS_DEPTH)
}

/// 指定最大跳数的 [`resolve`]
pub fn resolve_with_depth(value: &str, map: &TokenMap, max_depth: usize) -> String {
    AliasChain::new(value, map, max_depth)
        .last()
        .unwrap_or(value)
        .to_string()
}

/// 返回完整的解析链（首项为输入值本身）
pub fn resolve_chain(value: &str, map: &TokenMap) -> Vec<String> {
    std::iter::once(value)
        .chain(AliasChain::new(value, map, MAX_ALIAS_DEPTH))
        .map(str::to_string)
        .collect()
}
