//! Note request model.

use serde::{Deserialize, Deserializer, Serialize};

/// A request for notes on a subject nobody has shared yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    pub id: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub created_at: String,
    pub requester_id: String,
    #[serde(default)]
    pub fulfilled: bool,
}

/// Request body for opening a note request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNoteRequest {
    pub subject: String,
    #[serde(default)]
    pub details: Option<String>,
    pub requester_id: String,
}

impl NewNoteRequest {
    pub fn into_request(self) -> NoteRequest {
        NoteRequest {
            id: super::new_id(),
            subject: self.subject,
            details: self.details,
            created_at: super::timestamp_now(),
            requester_id: self.requester_id,
            fulfilled: false,
        }
    }
}

/// Partial update for a note request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequestPatch {
    #[serde(default)]
    pub subject: Option<String>,
    /// Absent leaves details alone, `null` clears them, a string replaces them.
    #[serde(default, deserialize_with = "present")]
    pub details: Option<Option<String>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl NoteRequestPatch {
    pub fn merge_into(self, request: &mut NoteRequest) {
        if let Some(subject) = self.subject {
            request.subject = subject;
        }
        if let Some(details) = self.details {
            request.details = details;
        }
    }
}
