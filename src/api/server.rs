use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

use sop_portal::catalog::CatalogStats;

use crate::api::ApiResponse;
use crate::state::AppState;

/// GET /api/health - 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "SOP portal is running",
        "time": Utc::now().to_rfc3339(),
    }))
}

/// GET /api/version - 版本信息
pub async fn get_version_info() -> Json<Value> {
    Json(json!({
        "code": 200,
        "data": {
            "backend_version": env!("CARGO_PKG_VERSION"),
            "build_time": env!("BUILD_TIME"),
        }
    }))
}

/// GET /api/stats - 目录统计
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<CatalogStats>> {
    Json(ApiResponse::success(state.catalog.stats()))
}
