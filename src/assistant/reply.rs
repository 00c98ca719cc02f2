//! Assistant reply types / 助手回复类型

use serde::{Deserialize, Serialize};

/// Source relevance label / 来源相关度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relevance {
    /// Department named in the query / 查询直接命中部门
    #[serde(rename = "Direct Match")]
    DirectMatch,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Relevance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectMatch => write!(f, "Direct Match"),
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Score thresholds for relevance tiers / 相关度分级阈值
///
/// Strictly greater than `high_above` is High, strictly greater than
/// `medium_above` is Medium, anything else Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub high_above: u32,
    pub medium_above: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high_above: 8,
            medium_above: 4,
        }
    }
}

impl TierThresholds {
    pub fn tier(&self, score: u32) -> Relevance {
        if score > self.high_above {
            Relevance::High
        } else if score > self.medium_above {
            Relevance::Medium
        } else {
            Relevance::Low
        }
    }
}

/// Reference backing an answer / 回答引用的来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    /// Department display name / 部门名称
    pub department: String,
    /// SOP identifier, or "Department Overview" / SOP标识
    pub sop: String,
    pub relevance: Relevance,
}

/// Markdown answer plus sources / 助手回复
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub content: String,
    pub sources: Vec<Source>,
}

impl AssistantReply {
    pub fn text(content: String) -> Self {
        Self {
            content,
            sources: Vec::new(),
        }
    }
}
