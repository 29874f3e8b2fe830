//! Reply model shared by suggestions and threads.

use serde::{Deserialize, Serialize};

/// A reply attached to exactly one suggestion or thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub text: String,
    pub created_at: String,
    pub author_id: String,
}

/// Request body for posting a reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    pub text: String,
    pub author_id: String,
}

impl NewReply {
    pub fn into_reply(self) -> Reply {
        Reply {
            id: super::new_id(),
            text: self.text,
            created_at: super::timestamp_now(),
            author_id: self.author_id,
        }
    }
}
