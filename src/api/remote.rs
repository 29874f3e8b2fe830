//! Remote API endpoints backed by SQLite.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{body, created, success, ApiResult};
use crate::models::{
    InsertNote, InsertRequest, InsertSuggestion, NoteRow, RequestRow, SuggestionRow,
};
use crate::AppState;

/// GET /api/suggestions - List all suggestion rows.
pub async fn list_suggestions(State(state): State<AppState>) -> ApiResult<Vec<SuggestionRow>> {
    success(state.repo.list_suggestions().await?)
}

/// POST /api/suggestions - Create a suggestion row.
pub async fn create_suggestion(
    State(state): State<AppState>,
    payload: Result<Json<InsertSuggestion>, JsonRejection>,
) -> ApiResult<SuggestionRow> {
    let insert = body(payload)?;
    created(state.repo.create_suggestion(&insert).await?)
}

/// GET /api/notes - List all note rows.
pub async fn list_notes(State(state): State<AppState>) -> ApiResult<Vec<NoteRow>> {
    success(state.repo.list_notes().await?)
}

/// POST /api/notes - Create a note row.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<InsertNote>, JsonRejection>,
) -> ApiResult<NoteRow> {
    let insert = body(payload)?;
    created(state.repo.create_note(&insert).await?)
}

/// GET /api/requests - List all note request rows.
pub async fn list_requests(State(state): State<AppState>) -> ApiResult<Vec<RequestRow>> {
    success(state.repo.list_requests().await?)
}

/// POST /api/requests - Create a note request row.
pub async fn create_request(
    State(state): State<AppState>,
    payload: Result<Json<InsertRequest>, JsonRejection>,
) -> ApiResult<RequestRow> {
    let insert = body(payload)?;
    created(state.repo.create_request(&insert).await?)
}
