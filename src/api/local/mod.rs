//! Local store endpoints under `/api/local`.
//!
//! Mutations on an unknown id answer 200 with `{"matched": false}`; the store treats
//! them as no-ops, and so does the API.

mod notes;
mod requests;
mod suggestions;
mod threads;

pub use notes::*;
pub use requests::*;
pub use suggestions::*;
pub use threads::*;

use axum::extract::{rejection::QueryRejection, Query, State};
use serde::{Deserialize, Serialize};

use super::{created, query, success, ApiResult};
use crate::models::{Reply, StoreData};
use crate::AppState;

/// Outcome of a store mutation addressed by id.
#[derive(Debug, Serialize)]
pub struct Matched {
    pub matched: bool,
}

/// Outcome of posting a reply. `reply` is absent when the owner was not found.
#[derive(Debug, Serialize)]
pub struct ReplyOutcome {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<Reply>,
}

impl ReplyOutcome {
    fn respond(reply: Option<Reply>) -> ApiResult<ReplyOutcome> {
        match reply {
            Some(reply) => created(ReplyOutcome {
                matched: true,
                reply: Some(reply),
            }),
            None => success(ReplyOutcome {
                matched: false,
                reply: None,
            }),
        }
    }
}

/// Body for vote endpoints.
#[derive(Debug, Deserialize)]
pub struct VoteBody {
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct IdentityQuery {
    #[serde(default)]
    pub wallet: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub actor_id: String,
}

fn matched(matched: bool) -> ApiResult<Matched> {
    success(Matched { matched })
}

/// GET /api/local - The whole local store.
pub async fn get_local_snapshot(State(state): State<AppState>) -> ApiResult<StoreData> {
    let store = state.local.lock().await;
    success(store.snapshot().clone())
}

/// GET /api/local/identity - Resolve the actor id for an optional wallet address.
pub async fn resolve_identity(
    State(state): State<AppState>,
    params: Result<Query<IdentityQuery>, QueryRejection>,
) -> ApiResult<Identity> {
    let params = query(params)?;
    let actor_id = state.identity.resolve(params.wallet.as_deref())?;
    success(Identity { actor_id })
}
