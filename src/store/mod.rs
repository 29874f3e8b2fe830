//! Local entity store.
//!
//! Owns the four board collections in memory and rewrites the whole snapshot into a
//! durable slot after every change. Collections are reached through short-lived
//! handles (`store.suggestions()`, `store.notes()`, ...) that borrow the store mutably.
//!
//! Mutations on an id that is not present are no-ops. They return `Ok(false)` instead
//! of an error so callers can tell a miss from a hit without treating it as a failure.

mod identity;
mod notes;
mod requests;
mod suggestions;
mod threads;

pub use identity::*;
pub use notes::*;
pub use requests::*;
pub use suggestions::*;
pub use threads::*;

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{NewReply, Note, NoteRequest, Reply, StoreData, Suggestion, Thread};
use crate::slots::DurableSlots;

/// Slot holding the serialized [`StoreData`].
pub const STORE_SLOT: &str = "campus-dao-store";

/// How far down a vote counter may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteFloor {
    /// Counter stops at zero.
    Zero,
    /// Counter may go negative.
    Unbounded,
}

impl VoteFloor {
    pub fn apply(self, votes: i64, delta: i64) -> i64 {
        let next = votes.saturating_add(delta);
        match self {
            VoteFloor::Zero => next.max(0),
            VoteFloor::Unbounded => next,
        }
    }
}

/// The local store context. Create one with [`LocalStore::load`] at startup.
pub struct LocalStore {
    data: StoreData,
    slots: Arc<dyn DurableSlots>,
}

impl LocalStore {
    /// Load the snapshot from `slots`.
    ///
    /// A snapshot that fails to parse is discarded and the store starts empty; only a
    /// failure to read the slot at all is an error.
    pub fn load(slots: Arc<dyn DurableSlots>) -> Result<Self, AppError> {
        let data = match slots.read(STORE_SLOT)? {
            Some(raw) => match serde_json::from_str::<StoreData>(&raw) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("Discarding unreadable local store snapshot: {}", e);
                    StoreData::default()
                }
            },
            None => StoreData::default(),
        };

        tracing::info!(
            "Local store loaded: {} suggestions, {} notes, {} requests, {} threads",
            data.suggestions.len(),
            data.notes.len(),
            data.requests.len(),
            data.threads.len()
        );

        Ok(Self { data, slots })
    }

    /// Write the full snapshot to the durable slot.
    pub fn flush(&self) -> Result<(), AppError> {
        let raw = serde_json::to_string(&self.data).map_err(|e| {
            AppError::Storage(format!("Failed to serialize local store: {}", e))
        })?;
        self.slots.write(STORE_SLOT, &raw)
    }

    /// All four collections as they would be persisted.
    pub fn snapshot(&self) -> &StoreData {
        &self.data
    }

    pub fn suggestions(&mut self) -> Suggestions<'_> {
        Suggestions::new(self)
    }

    pub fn notes(&mut self) -> Notes<'_> {
        Notes::new(self)
    }

    pub fn requests(&mut self) -> Requests<'_> {
        Requests::new(self)
    }

    pub fn threads(&mut self) -> Threads<'_> {
        Threads::new(self)
    }

    /// Persist after a mutation that matched; log and skip when it did not.
    fn commit(&self, matched: bool, what: &str, id: &str) -> Result<bool, AppError> {
        if matched {
            self.flush()?;
        } else {
            tracing::debug!("{} on missing id {} ignored", what, id);
        }
        Ok(matched)
    }
}

/// Entities addressable by id inside a collection.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

/// Entities that own an ordered reply list.
pub(crate) trait Threaded: Keyed {
    fn replies_mut(&mut self) -> &mut Vec<Reply>;
}

impl Keyed for Suggestion {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Note {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for NoteRequest {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Thread {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Threaded for Suggestion {
    fn replies_mut(&mut self) -> &mut Vec<Reply> {
        &mut self.replies
    }
}

impl Threaded for Thread {
    fn replies_mut(&mut self) -> &mut Vec<Reply> {
        &mut self.replies
    }
}

fn find<'a, T: Keyed>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.key() == id)
}

fn find_mut<'a, T: Keyed>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.key() == id)
}

fn remove_by_id<T: Keyed>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.key() != id);
    items.len() != before
}

fn append_reply<T: Threaded>(items: &mut [T], owner_id: &str, reply: NewReply) -> Option<Reply> {
    let owner = find_mut(items, owner_id)?;
    let reply = reply.into_reply();
    owner.replies_mut().push(reply.clone());
    Some(reply)
}

fn drop_reply<T: Threaded>(items: &mut [T], owner_id: &str, reply_id: &str) -> bool {
    match find_mut(items, owner_id) {
        Some(owner) => {
            let replies = owner.replies_mut();
            let before = replies.len();
            replies.retain(|r| r.id != reply_id);
            replies.len() != before
        }
        None => false,
    }
}
