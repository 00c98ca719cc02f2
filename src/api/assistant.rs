use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use sop_portal::assistant::AssistantReply;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub query: String,
}

/// POST /api/assistant - 助手问答
pub async fn ask(State(state): State<Arc<AppState>>, Json(req): Json<AssistantRequest>) -> Json<AssistantReply> {
    Json(state.assistant.respond(&req.query))
}
