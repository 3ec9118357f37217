use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::json_response;
use crate::app_state::AppState;

const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Элемент списка подсказок
#[derive(Debug, Serialize)]
pub struct AutoCompleteItem {
    pub id: Uuid,
    pub label: String,
}

/// GET /api/organization
pub async fn list_all(State(state): State<AppState>) -> Result<Response, StatusCode> {
    json_response(state.response_codec, state.organizations.list_all())
}

/// GET /api/organization/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, StatusCode> {
    let items: Vec<AutoCompleteItem> = state
        .organizations
        .auto_complete(
            query.q.as_deref().unwrap_or_default(),
            query.limit.unwrap_or(DEFAULT_LIMIT),
        )
        .into_iter()
        .map(|(id, label)| AutoCompleteItem { id, label })
        .collect();
    json_response(state.response_codec, &items)
}
