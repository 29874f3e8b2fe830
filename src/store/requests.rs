//! Note request collection handle.

use super::{find, find_mut, remove_by_id, LocalStore};
use crate::errors::AppError;
use crate::models::{NewNoteRequest, NoteRequest, NoteRequestPatch};

pub struct Requests<'a> {
    store: &'a mut LocalStore,
}

impl<'a> Requests<'a> {
    pub(super) fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[NoteRequest] {
        &self.store.data.requests
    }

    pub fn get(&self, id: &str) -> Option<&NoteRequest> {
        find(&self.store.data.requests, id)
    }

    /// Requests nobody has marked fulfilled yet, newest first.
    pub fn open(&self) -> Vec<&NoteRequest> {
        self.store
            .data
            .requests
            .iter()
            .filter(|r| !r.fulfilled)
            .collect()
    }

    pub fn add(&mut self, new: NewNoteRequest) -> Result<NoteRequest, AppError> {
        let request = new.into_request();
        self.store.data.requests.insert(0, request.clone());
        self.store.flush()?;
        Ok(request)
    }

    pub fn update(&mut self, id: &str, patch: NoteRequestPatch) -> Result<bool, AppError> {
        let matched = match find_mut(&mut self.store.data.requests, id) {
            Some(request) => {
                patch.merge_into(request);
                true
            }
            None => false,
        };
        self.store.commit(matched, "request update", id)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, AppError> {
        let matched = remove_by_id(&mut self.store.data.requests, id);
        self.store.commit(matched, "request remove", id)
    }

    /// Set the fulfilled flag. Any caller may flip it either way.
    pub fn fulfill(&mut self, id: &str, fulfilled: bool) -> Result<bool, AppError> {
        let matched = match find_mut(&mut self.store.data.requests, id) {
            Some(request) => {
                request.fulfilled = fulfilled;
                true
            }
            None => false,
        };
        self.store.commit(matched, "request fulfill", id)
    }
}
