//! Search engine - linear keyword-overlap scorer / 搜索引擎
//!
//! Architecture principle: only expose primitive operations, do not control flow / 架构原则
//! - search: rank SOPs for a free-text query / 搜索
//!
//! The catalog is small (a few hundred SOPs), so every query is a full scan
//! over pre-lowercased fields instead of an inverted index.

use std::sync::Arc;

use super::schema::{ScoreWeights, SearchHit, SearchOptions};
use super::tokenizer::{extract_keywords, normalize_field, normalize_query};
use crate::catalog::Catalog;

/// Lowercased copy of the searchable SOP fields / SOP可搜索字段的小写副本
#[derive(Debug)]
struct IndexedSop {
    dept: usize,
    sop: usize,
    id: String,
    title: String,
    purpose: String,
    flow: Vec<String>,
    department_name: String,
    department_code: String,
}

/// Search engine / 搜索引擎
///
/// Pure function of (catalog, query): no interior mutability, safe to share
/// across any number of concurrent requests.
#[derive(Debug)]
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    entries: Vec<IndexedSop>,
    weights: ScoreWeights,
    options: SearchOptions,
}

impl SearchEngine {
    /// Create new search engine instance / 创建新的搜索引擎实例
    pub fn new(catalog: Arc<Catalog>, weights: ScoreWeights, options: SearchOptions) -> Self {
        let mut entries = Vec::with_capacity(catalog.sop_count());
        for (d, dept) in catalog.departments().iter().enumerate() {
            let department_name = normalize_field(&dept.name);
            let department_code = normalize_field(&dept.id);
            for (s, sop) in dept.sops.iter().enumerate() {
                entries.push(IndexedSop {
                    dept: d,
                    sop: s,
                    id: normalize_field(&sop.id),
                    title: normalize_field(&sop.title),
                    purpose: normalize_field(&sop.purpose),
                    flow: sop.flow.iter().map(|step| normalize_field(step)).collect(),
                    department_name: department_name.clone(),
                    department_code: department_code.clone(),
                });
            }
        }

        tracing::debug!("Search engine ready: {} SOPs", entries.len());

        Self {
            catalog,
            entries,
            weights,
            options,
        }
    }

    /// Engine with default weights and options / 使用默认权重
    pub fn with_defaults(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, ScoreWeights::default(), SearchOptions::default())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// 搜索（原语操作）
    ///
    /// Returns at most `limit` hits sorted by descending score; equal scores
    /// keep catalog order. A blank query matches nothing. Any other query,
    /// even a single character, runs the whole-query substring checks; only
    /// keyword bonuses depend on token length.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let q = normalize_query(query);
        if q.is_empty() {
            return Vec::new();
        }

        let keywords = extract_keywords(&q, self.options.min_keyword_len);

        let mut hits: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = self.score_entry(entry, &q, &keywords);
                if score == 0 {
                    return None;
                }
                let department = &self.catalog.departments()[entry.dept];
                Some(SearchHit {
                    department,
                    sop: &department.sops[entry.sop],
                    score,
                })
            })
            .collect();

        // sort_by 是稳定排序，同分保持目录顺序
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(self.options.limit);

        tracing::debug!("search {:?}: {} keywords, {} hits", q, keywords.len(), hits.len());
        hits
    }

    fn score_entry(&self, entry: &IndexedSop, q: &str, keywords: &[String]) -> u32 {
        let w = &self.weights;
        let mut score = 0;

        if entry.title.contains(q) {
            score += w.title_exact;
        }
        for kw in keywords {
            if entry.title.contains(kw.as_str()) {
                score += w.title_keyword;
            }
        }

        if entry.purpose.contains(q) {
            score += w.purpose_exact;
        }
        for kw in keywords {
            if entry.purpose.contains(kw.as_str()) {
                score += w.purpose_keyword;
            }
        }

        for step in &entry.flow {
            if step.contains(q) {
                score += w.flow_exact;
            }
            for kw in keywords {
                if step.contains(kw.as_str()) {
                    score += w.flow_keyword;
                }
            }
        }

        if entry.department_name.contains(q) {
            score += w.department_name;
        }
        if entry.department_code.contains(q) {
            score += w.department_code;
        }
        if entry.id.contains(q) {
            score += w.sop_id;
        }

        score
    }
}
