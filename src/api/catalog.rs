//! Department and SOP browsing / 部门与SOP浏览

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use sop_portal::models::{DepartmentSummary, Sop};

use crate::api::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DepartmentQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct DepartmentList {
    pub organization: String,
    pub departments: Vec<DepartmentSummary>,
    pub total: usize,
}

/// SOP with its owning department / SOP详情
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SopDetail {
    pub department: String,
    pub department_name: String,
    pub sop: Sop,
}

/// GET /api/departments?q= - 部门列表（支持过滤）
pub async fn list_departments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DepartmentQuery>,
) -> Json<ApiResponse<DepartmentList>> {
    let departments: Vec<DepartmentSummary> = state
        .catalog
        .filter_departments(&query.q)
        .into_iter()
        .map(DepartmentSummary::from)
        .collect();

    Json(ApiResponse::success(DepartmentList {
        organization: state.catalog.organization().to_string(),
        total: departments.len(),
        departments,
    }))
}

/// GET /api/departments/:id - 部门详情
pub async fn get_department(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.catalog.department(&id) {
        Some(dept) => Json(ApiResponse::success(dept.clone())).into_response(),
        None => not_found(&format!("Department not found: {}", id)),
    }
}

/// GET /api/departments/:dept_id/sops/:sop_id - SOP详情
pub async fn get_sop(
    State(state): State<Arc<AppState>>,
    Path((dept_id, sop_id)): Path<(String, String)>,
) -> Response {
    match state.catalog.sop(&sop_id) {
        Some((dept, sop)) if dept.id.eq_ignore_ascii_case(dept_id.trim()) => Json(ApiResponse::success(SopDetail {
            department: dept.id.clone(),
            department_name: dept.name.clone(),
            sop: sop.clone(),
        }))
        .into_response(),
        _ => not_found(&format!("SOP {} not found in department {}", sop_id, dept_id)),
    }
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::with_code(404, message))).into_response()
}
