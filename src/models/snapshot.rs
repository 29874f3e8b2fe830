//! Snapshot model: the whole local store as persisted in its durable slot.

use serde::{Deserialize, Serialize};

use super::{Note, NoteRequest, Suggestion, Thread};

/// All four local collections, each newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreData {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub requests: Vec<NoteRequest>,
    #[serde(default)]
    pub threads: Vec<Thread>,
}
