//! Local suggestion endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use super::{matched, Matched, ReplyOutcome, VoteBody};
use crate::api::{body, created, query, success, validate, ApiResult};
use crate::errors::AppError;
use crate::models::{Category, NewReply, NewSuggestion, Suggestion, SuggestionPatch};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestionFilter {
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /api/local/suggestions - List suggestions, optionally for one category.
pub async fn list_local_suggestions(
    State(state): State<AppState>,
    params: Result<Query<SuggestionFilter>, QueryRejection>,
) -> ApiResult<Vec<Suggestion>> {
    let filter = query(params)?;
    let category = match filter.category.as_deref() {
        None => None,
        Some(raw) if raw.trim().eq_ignore_ascii_case("all") => None,
        Some(raw) => Some(Category::parse(raw).ok_or_else(|| {
            AppError::Validation(format!("Unknown category {}", raw))
        })?),
    };

    let mut store = state.local.lock().await;
    let suggestions = store.suggestions();
    let list = match category {
        Some(category) => suggestions
            .by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => suggestions.all().to_vec(),
    };
    success(list)
}

/// GET /api/local/suggestions/{id}
pub async fn get_local_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Suggestion> {
    let mut store = state.local.lock().await;
    let suggestion = store
        .suggestions()
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Suggestion {} not found", id)))?;
    success(suggestion)
}

/// POST /api/local/suggestions
pub async fn create_local_suggestion(
    State(state): State<AppState>,
    payload: Result<Json<NewSuggestion>, JsonRejection>,
) -> ApiResult<Suggestion> {
    let new = body(payload)?;
    validate::new_suggestion(&new)?;

    let suggestion = state.local.lock().await.suggestions().add(new)?;
    created(suggestion)
}

/// PUT /api/local/suggestions/{id}
pub async fn update_local_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SuggestionPatch>, JsonRejection>,
) -> ApiResult<Matched> {
    let patch = body(payload)?;
    validate::suggestion_patch(&patch)?;

    matched(state.local.lock().await.suggestions().update(&id, patch)?)
}

/// DELETE /api/local/suggestions/{id}
pub async fn delete_local_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Matched> {
    matched(state.local.lock().await.suggestions().remove(&id)?)
}

/// POST /api/local/suggestions/{id}/vote
pub async fn vote_local_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VoteBody>, JsonRejection>,
) -> ApiResult<Matched> {
    let vote = body(payload)?;
    matched(state.local.lock().await.suggestions().vote(&id, vote.delta)?)
}

/// POST /api/local/suggestions/{id}/replies
pub async fn reply_local_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewReply>, JsonRejection>,
) -> ApiResult<ReplyOutcome> {
    let reply = body(payload)?;
    validate::new_reply(&reply)?;

    ReplyOutcome::respond(state.local.lock().await.suggestions().reply(&id, reply)?)
}

/// DELETE /api/local/suggestions/{id}/replies/{reply_id}
pub async fn delete_local_suggestion_reply(
    State(state): State<AppState>,
    Path((id, reply_id)): Path<(String, String)>,
) -> ApiResult<Matched> {
    matched(
        state
            .local
            .lock()
            .await
            .suggestions()
            .remove_reply(&id, &reply_id)?,
    )
}
