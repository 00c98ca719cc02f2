use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use sop_portal::search::SearchResultItem;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
    pub total: usize,
}

/// GET /api/search?q= - SOP搜索
pub async fn search(State(state): State<Arc<AppState>>, Query(query): Query<SearchQuery>) -> Json<SearchResponse> {
    let q = query.q.trim();

    // 查询过短直接返回空结果
    if q.chars().count() < state.min_query_len {
        return Json(SearchResponse {
            results: Vec::new(),
            total: 0,
        });
    }

    let results: Vec<SearchResultItem> = state.engine.search(q).iter().map(SearchResultItem::from).collect();

    Json(SearchResponse {
        total: results.len(),
        results,
    })
}
