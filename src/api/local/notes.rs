//! Local note endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{matched, Matched, VoteBody};
use crate::api::{body, created, success, validate, ApiResult};
use crate::errors::AppError;
use crate::models::{NewNote, Note, NotePatch};
use crate::AppState;

/// GET /api/local/notes
pub async fn list_local_notes(State(state): State<AppState>) -> ApiResult<Vec<Note>> {
    let notes = state.local.lock().await.notes().all().to_vec();
    success(notes)
}

/// GET /api/local/notes/{id}
pub async fn get_local_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Note> {
    let mut store = state.local.lock().await;
    let note = store
        .notes()
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Note {} not found", id)))?;
    success(note)
}

/// POST /api/local/notes
pub async fn create_local_note(
    State(state): State<AppState>,
    payload: Result<Json<NewNote>, JsonRejection>,
) -> ApiResult<Note> {
    let new = body(payload)?;
    validate::new_note(&new)?;

    let note = state.local.lock().await.notes().add(new)?;
    created(note)
}

/// PUT /api/local/notes/{id}
pub async fn update_local_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NotePatch>, JsonRejection>,
) -> ApiResult<Matched> {
    let patch = body(payload)?;
    validate::note_patch(&patch)?;

    matched(state.local.lock().await.notes().update(&id, patch)?)
}

/// DELETE /api/local/notes/{id}
pub async fn delete_local_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Matched> {
    matched(state.local.lock().await.notes().remove(&id)?)
}

/// POST /api/local/notes/{id}/vote
pub async fn vote_local_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VoteBody>, JsonRejection>,
) -> ApiResult<Matched> {
    let vote = body(payload)?;
    matched(state.local.lock().await.notes().vote(&id, vote.delta)?)
}
