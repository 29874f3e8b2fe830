//! Local discussion thread endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{matched, Matched, ReplyOutcome};
use crate::api::{body, created, success, validate, ApiResult};
use crate::errors::AppError;
use crate::models::{NewReply, NewThread, Thread, ThreadPatch};
use crate::AppState;

/// GET /api/local/threads
pub async fn list_local_threads(State(state): State<AppState>) -> ApiResult<Vec<Thread>> {
    let threads = state.local.lock().await.threads().all().to_vec();
    success(threads)
}

/// GET /api/local/threads/{id}
pub async fn get_local_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Thread> {
    let mut store = state.local.lock().await;
    let thread = store
        .threads()
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Thread {} not found", id)))?;
    success(thread)
}

/// POST /api/local/threads
pub async fn create_local_thread(
    State(state): State<AppState>,
    payload: Result<Json<NewThread>, JsonRejection>,
) -> ApiResult<Thread> {
    let new = body(payload)?;
    validate::new_thread(&new)?;

    let thread = state.local.lock().await.threads().add(new)?;
    created(thread)
}

/// PUT /api/local/threads/{id}
pub async fn update_local_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ThreadPatch>, JsonRejection>,
) -> ApiResult<Matched> {
    let patch = body(payload)?;
    validate::thread_patch(&patch)?;

    matched(state.local.lock().await.threads().update(&id, patch)?)
}

/// DELETE /api/local/threads/{id}
pub async fn delete_local_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Matched> {
    matched(state.local.lock().await.threads().remove(&id)?)
}

/// POST /api/local/threads/{id}/replies
pub async fn reply_local_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewReply>, JsonRejection>,
) -> ApiResult<ReplyOutcome> {
    let reply = body(payload)?;
    validate::new_reply(&reply)?;

    ReplyOutcome::respond(state.local.lock().await.threads().reply(&id, reply)?)
}

/// DELETE /api/local/threads/{id}/replies/{reply_id}
pub async fn delete_local_thread_reply(
    State(state): State<AppState>,
    Path((id, reply_id)): Path<(String, String)>,
) -> ApiResult<Matched> {
    matched(
        state
            .local
            .lock()
            .await
            .threads()
            .remove_reply(&id, &reply_id)?,
    )
}
