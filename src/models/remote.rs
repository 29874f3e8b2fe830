//! Rows of the relational remote API.
//!
//! Field names follow the remote contract (`voteCount`, `ipfsHash`, `isFulfilled`).

use serde::{Deserialize, Serialize};

/// A suggestion row in the `suggestions` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRow {
    pub id: i64,
    pub pubkey: String,
    pub author: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub vote_count: i64,
    pub created_at: String,
}

/// Insert shape for a suggestion row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSuggestion {
    pub author: String,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// A note row in the `notes` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRow {
    pub id: i64,
    pub pubkey: String,
    pub author: String,
    pub subject: String,
    pub title: String,
    pub ipfs_hash: String,
    pub created_at: String,
}

/// Insert shape for a note row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertNote {
    pub author: String,
    pub subject: String,
    pub title: String,
    pub ipfs_hash: String,
}

/// A note request row in the `requests` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRow {
    pub id: i64,
    pub pubkey: String,
    pub author: String,
    pub subject: String,
    pub description: String,
    pub is_fulfilled: bool,
    pub created_at: String,
}

/// Insert shape for a note request row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertRequest {
    pub author: String,
    pub subject: String,
    pub description: String,
}
