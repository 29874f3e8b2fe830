//! Note collection handle.

use super::{find, find_mut, remove_by_id, LocalStore, VoteFloor};
use crate::errors::AppError;
use crate::models::{NewNote, Note, NotePatch};

/// Note votes are a plain counter and may go negative.
pub const NOTE_VOTE_FLOOR: VoteFloor = VoteFloor::Unbounded;

pub struct Notes<'a> {
    store: &'a mut LocalStore,
}

impl<'a> Notes<'a> {
    pub(super) fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[Note] {
        &self.store.data.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        find(&self.store.data.notes, id)
    }

    pub fn add(&mut self, new: NewNote) -> Result<Note, AppError> {
        let note = new.into_note();
        self.store.data.notes.insert(0, note.clone());
        self.store.flush()?;
        Ok(note)
    }

    pub fn update(&mut self, id: &str, patch: NotePatch) -> Result<bool, AppError> {
        let matched = match find_mut(&mut self.store.data.notes, id) {
            Some(note) => {
                patch.merge_into(note);
                true
            }
            None => false,
        };
        self.store.commit(matched, "note update", id)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, AppError> {
        let matched = remove_by_id(&mut self.store.data.notes, id);
        self.store.commit(matched, "note remove", id)
    }

    pub fn vote(&mut self, id: &str, delta: i64) -> Result<bool, AppError> {
        let matched = match find_mut(&mut self.store.data.notes, id) {
            Some(note) => {
                note.votes = NOTE_VOTE_FLOOR.apply(note.votes, delta);
                true
            }
            None => false,
        };
        self.store.commit(matched, "note vote", id)
    }
}
