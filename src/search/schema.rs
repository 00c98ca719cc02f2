//! Search types and scoring weights / 搜索类型与评分权重

use serde::{Deserialize, Serialize};

use super::tokenizer::DEFAULT_MIN_KEYWORD_LEN;
use crate::models::{Department, Sop};

/// Additive scoring weights / 加法评分权重
///
/// "Exact" entries fire when the whole normalized query is a substring of the
/// field; "keyword" entries fire once per keyword contained in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub title_exact: u32,
    pub title_keyword: u32,
    pub purpose_exact: u32,
    pub purpose_keyword: u32,
    /// Per matching flow step / 每个匹配的流程步骤
    pub flow_exact: u32,
    /// Per keyword per flow step / 每个关键词每个步骤
    pub flow_keyword: u32,
    pub department_name: u32,
    pub department_code: u32,
    pub sop_id: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_exact: 10,
            title_keyword: 3,
            purpose_exact: 5,
            purpose_keyword: 2,
            flow_exact: 3,
            flow_keyword: 1,
            department_name: 4,
            department_code: 4,
            sop_id: 8,
        }
    }
}

/// Search options / 搜索选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits returned / 最大返回结果数
    pub limit: usize,
    /// Tokens of this many chars or fewer are not keywords / 关键词最小长度
    pub min_keyword_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            min_keyword_len: DEFAULT_MIN_KEYWORD_LEN,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_min_keyword_len(mut self, min_keyword_len: usize) -> Self {
        self.min_keyword_len = min_keyword_len;
        self
    }
}

/// Ranked match / 搜索命中
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub department: &'a Department,
    pub sop: &'a Sop,
    pub score: u32,
}

/// Serializable search result item / 搜索结果项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub department: String,
    pub department_name: String,
    pub sop: String,
    pub title: String,
    pub score: u32,
}

impl From<&SearchHit<'_>> for SearchResultItem {
    fn from(hit: &SearchHit<'_>) -> Self {
        Self {
            department: hit.department.id.clone(),
            department_name: hit.department.name.clone(),
            sop: hit.sop.id.clone(),
            title: hit.sop.title.clone(),
            score: hit.score,
        }
    }
}
