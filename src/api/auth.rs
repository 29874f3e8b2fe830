//! Wallet handshake endpoints. Only mounted when wallet auth is enabled.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use super::{body, query};
use crate::errors::AppError;
use crate::models::{NonceQuery, NonceResponse, VerifyRequest, VerifyResponse};
use crate::AppState;

/// GET /api/auth/nonce?address= - Issue a nonce for a wallet address.
pub async fn issue_nonce(
    State(state): State<AppState>,
    params: Result<Query<NonceQuery>, QueryRejection>,
) -> Result<Json<NonceResponse>, AppError> {
    let params = query(params)?;
    let nonce = state.nonces.issue(&params.address).await;
    Ok(Json(NonceResponse { nonce }))
}

/// POST /api/auth/verify - Check a signed nonce message.
pub async fn verify_wallet(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let request = body(payload)?;
    let token = state.nonces.verify(&request).await?;
    Ok(Json(VerifyResponse {
        success: true,
        token,
    }))
}
