//! Note model for the shared notes library.

use serde::{Deserialize, Serialize};

/// A link to study notes shared by a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub link: String,
    pub created_at: String,
    pub author_id: String,
    pub votes: i64,
}

/// Request body for sharing a note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub subject: String,
    pub link: String,
    pub author_id: String,
}

impl NewNote {
    pub fn into_note(self) -> Note {
        Note {
            id: super::new_id(),
            title: self.title,
            subject: self.subject,
            link: self.link,
            created_at: super::timestamp_now(),
            author_id: self.author_id,
            votes: 0,
        }
    }
}

/// Partial update for a note.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl NotePatch {
    pub fn merge_into(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(subject) = self.subject {
            note.subject = subject;
        }
        if let Some(link) = self.link {
            note.link = link;
        }
    }
}
