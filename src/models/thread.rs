//! Discussion thread model.

use serde::{Deserialize, Serialize};

use super::Reply;

/// A discussion thread with its replies in posting order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub author_id: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// Request body for starting a thread.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub author_id: String,
}

impl NewThread {
    pub fn into_thread(self) -> Thread {
        Thread {
            id: super::new_id(),
            title: self.title,
            body: self.body,
            created_at: super::timestamp_now(),
            author_id: self.author_id,
            replies: Vec::new(),
        }
    }
}

/// Partial update for a thread.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ThreadPatch {
    pub fn merge_into(self, thread: &mut Thread) {
        if let Some(title) = self.title {
            thread.title = title;
        }
        if let Some(body) = self.body {
            thread.body = body;
        }
    }
}
