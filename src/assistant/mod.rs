//! Assistant - rule-based conversational answers / 规则型问答助手
//!
//! Call direction: api → assistant → search (unidirectional) / 调用方向
//!
//! No language model and no conversation memory: every reply is a pure
//! function of (catalog, query).

pub mod intent;
pub mod messages;
pub mod reply;

pub use intent::{classify, Intent};
pub use reply::{AssistantReply, Relevance, Source, TierThresholds};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::search::SearchEngine;

const DEPARTMENT_OVERVIEW: &str = "Department Overview";

/// Number of runners-up listed under "Related SOPs" / 相关SOP数量
const RELATED_LIMIT: usize = 3;

/// SOP assistant / SOP助手
#[derive(Debug, Clone)]
pub struct Assistant {
    engine: Arc<SearchEngine>,
    tiers: TierThresholds,
}

impl Assistant {
    pub fn new(engine: Arc<SearchEngine>, tiers: TierThresholds) -> Self {
        Self { engine, tiers }
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    pub fn tiers(&self) -> &TierThresholds {
        &self.tiers
    }

    /// Answer a free-text question / 回答问题
    pub fn respond(&self, query: &str) -> AssistantReply {
        let catalog = self.catalog();
        let intent = classify(query, catalog);
        tracing::debug!("assistant intent: {}", intent);

        match intent {
            Intent::Greeting => AssistantReply::text(messages::greeting(catalog)),
            Intent::Help => AssistantReply::text(messages::help(catalog)),
            Intent::ListDepartments => AssistantReply::text(messages::department_list(catalog)),
            Intent::Department(dept) => AssistantReply {
                content: messages::department_profile(dept),
                sources: vec![Source {
                    department: dept.name.clone(),
                    sop: DEPARTMENT_OVERVIEW.to_string(),
                    relevance: Relevance::DirectMatch,
                }],
            },
            Intent::Search => self.answer_from_search(query),
        }
    }

    fn answer_from_search(&self, query: &str) -> AssistantReply {
        let hits = self.engine.search(query);
        let Some((top, rest)) = hits.split_first() else {
            return AssistantReply::text(messages::no_match());
        };

        let related = &rest[..rest.len().min(RELATED_LIMIT)];
        let sources = hits
            .iter()
            .map(|hit| Source {
                department: hit.department.name.clone(),
                sop: hit.sop.id.clone(),
                relevance: self.tiers.tier(hit.score),
            })
            .collect();

        AssistantReply {
            content: messages::sop_answer(top, related),
            sources,
        }
    }
}
