//! Query tokenizer / 查询分词
//!
//! Lowercase + whitespace split. Short tokens are dropped from the keyword
//! list but the full normalized query is still used for substring checks.

/// Default minimum keyword length, tokens of this length or shorter are dropped / 默认关键词最小长度
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 2;

/// Normalize query for matching: trim + lowercase / 标准化查询
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Extract keywords from a normalized query / 从标准化查询中提取关键词
///
/// Keeps tokens strictly longer than `min_len` characters. Duplicates are kept,
/// each one scores on its own.
pub fn extract_keywords(normalized: &str, min_len: usize) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

/// Lowercase text for indexing / 索引用的小写文本
pub fn normalize_field(text: &str) -> String {
    text.to_lowercase()
}
