//! Wallet handshake payloads.

use serde::{Deserialize, Serialize};

/// Query for `GET /api/auth/nonce`.
#[derive(Debug, Clone, Deserialize)]
pub struct NonceQuery {
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonceResponse {
    pub nonce: u32,
}

/// Body for `POST /api/auth/verify`. The signature arrives as a JSON byte array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub address: String,
    pub message: String,
    pub signature: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub token: String,
}
