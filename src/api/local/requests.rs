//! Local note request endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use super::{matched, Matched};
use crate::api::{body, created, query, success, validate, ApiResult};
use crate::errors::AppError;
use crate::models::{NewNoteRequest, NoteRequest, NoteRequestPatch};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RequestFilter {
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Deserialize)]
pub struct FulfillBody {
    pub fulfilled: bool,
}

/// GET /api/local/requests - All requests, or only unfulfilled ones with `?open=true`.
pub async fn list_local_requests(
    State(state): State<AppState>,
    params: Result<Query<RequestFilter>, QueryRejection>,
) -> ApiResult<Vec<NoteRequest>> {
    let filter = query(params)?;
    let mut store = state.local.lock().await;
    let requests = store.requests();
    let list = if filter.open {
        requests.open().into_iter().cloned().collect()
    } else {
        requests.all().to_vec()
    };
    success(list)
}

/// GET /api/local/requests/{id}
pub async fn get_local_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<NoteRequest> {
    let mut store = state.local.lock().await;
    let request = store
        .requests()
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Note request {} not found", id)))?;
    success(request)
}

/// POST /api/local/requests
pub async fn create_local_request(
    State(state): State<AppState>,
    payload: Result<Json<NewNoteRequest>, JsonRejection>,
) -> ApiResult<NoteRequest> {
    let new = body(payload)?;
    validate::new_request(&new)?;

    let request = state.local.lock().await.requests().add(new)?;
    created(request)
}

/// PUT /api/local/requests/{id}
pub async fn update_local_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NoteRequestPatch>, JsonRejection>,
) -> ApiResult<Matched> {
    let patch = body(payload)?;
    validate::request_patch(&patch)?;

    matched(state.local.lock().await.requests().update(&id, patch)?)
}

/// DELETE /api/local/requests/{id}
pub async fn delete_local_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Matched> {
    matched(state.local.lock().await.requests().remove(&id)?)
}

/// POST /api/local/requests/{id}/fulfill
pub async fn fulfill_local_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<FulfillBody>, JsonRejection>,
) -> ApiResult<Matched> {
    let fulfill = body(payload)?;
    matched(
        state
            .local
            .lock()
            .await
            .requests()
            .fulfill(&id, fulfill.fulfilled)?,
    )
}
