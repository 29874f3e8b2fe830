//! Discussion thread collection handle.

use super::{append_reply, drop_reply, find, find_mut, remove_by_id, LocalStore};
use crate::errors::AppError;
use crate::models::{NewReply, NewThread, Reply, Thread, ThreadPatch};

pub struct Threads<'a> {
    store: &'a mut LocalStore,
}

impl<'a> Threads<'a> {
    pub(super) fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[Thread] {
        &self.store.data.threads
    }

    pub fn get(&self, id: &str) -> Option<&Thread> {
        find(&self.store.data.threads, id)
    }

    pub fn add(&mut self, new: NewThread) -> Result<Thread, AppError> {
        let thread = new.into_thread();
        self.store.data.threads.insert(0, thread.clone());
        self.store.flush()?;
        Ok(thread)
    }

    pub fn update(&mut self, id: &str, patch: ThreadPatch) -> Result<bool, AppError> {
        let matched = match find_mut(&mut self.store.data.threads, id) {
            Some(thread) => {
                patch.merge_into(thread);
                true
            }
            None => false,
        };
        self.store.commit(matched, "thread update", id)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, AppError> {
        let matched = remove_by_id(&mut self.store.data.threads, id);
        self.store.commit(matched, "thread remove", id)
    }

    pub fn reply(&mut self, id: &str, reply: NewReply) -> Result<Option<Reply>, AppError> {
        let created = append_reply(&mut self.store.data.threads, id, reply);
        self.store.commit(created.is_some(), "thread reply", id)?;
        Ok(created)
    }

    pub fn remove_reply(&mut self, id: &str, reply_id: &str) -> Result<bool, AppError> {
        let matched = drop_reply(&mut self.store.data.threads, id, reply_id);
        self.store.commit(matched, "thread reply removal", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::memory_store;

    fn timetable() -> NewThread {
        NewThread {
            title: "Exam timetable".into(),
            body: "Has anyone seen the final exam timetable?".into(),
            author_id: "guest-1".into(),
        }
    }

    #[test]
    fn test_thread_replies_keep_posting_order() {
        let (mut store, _slots) = memory_store();
        let mut threads = store.threads();
        let thread = threads.add(timetable()).unwrap();

        for text in ["first", "second", "third"] {
            threads
                .reply(
                    &thread.id,
                    NewReply {
                        text: text.into(),
                        author_id: "guest-2".into(),
                    },
                )
                .unwrap();
        }

        let texts: Vec<_> = threads
            .get(&thread.id)
            .unwrap()
            .replies
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_thread_update_leaves_replies() {
        let (mut store, _slots) = memory_store();
        let mut threads = store.threads();
        let thread = threads.add(timetable()).unwrap();
        let reply = threads
            .reply(
                &thread.id,
                NewReply {
                    text: "Posted on the portal".into(),
                    author_id: "guest-3".into(),
                },
            )
            .unwrap()
            .unwrap();

        let patch = ThreadPatch {
            body: Some("Found it, thanks.".into()),
            ..Default::default()
        };
        assert!(threads.update(&thread.id, patch).unwrap());

        let updated = threads.get(&thread.id).unwrap();
        assert_eq!(updated.title, "Exam timetable");
        assert_eq!(updated.body, "Found it, thanks.");
        assert_eq!(updated.replies, vec![reply]);
    }

    #[test]
    fn test_removing_thread_drops_its_replies() {
        let (mut store, _slots) = memory_store();
        let mut threads = store.threads();
        let thread = threads.add(timetable()).unwrap();
        threads
            .reply(
                &thread.id,
                NewReply {
                    text: "bump".into(),
                    author_id: "guest-3".into(),
                },
            )
            .unwrap();

        assert!(threads.remove(&thread.id).unwrap());
        assert!(threads.all().is_empty());
        assert!(!threads.remove_reply(&thread.id, "any").unwrap());
    }
}
