//! Suggestion collection handle.

use super::{append_reply, drop_reply, find, find_mut, remove_by_id, LocalStore, VoteFloor};
use crate::errors::AppError;
use crate::models::{Category, NewReply, NewSuggestion, Reply, Suggestion, SuggestionPatch};

/// Suggestion votes never drop below zero.
pub const SUGGESTION_VOTE_FLOOR: VoteFloor = VoteFloor::Zero;

pub struct Suggestions<'a> {
    store: &'a mut LocalStore,
}

impl<'a> Suggestions<'a> {
    pub(super) fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    /// All suggestions, newest first.
    pub fn all(&self) -> &[Suggestion] {
        &self.store.data.suggestions
    }

    pub fn get(&self, id: &str) -> Option<&Suggestion> {
        find(&self.store.data.suggestions, id)
    }

    /// Suggestions in one category, keeping collection order.
    pub fn by_category(&self, category: Category) -> Vec<&Suggestion> {
        self.store
            .data
            .suggestions
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    pub fn add(&mut self, new: NewSuggestion) -> Result<Suggestion, AppError> {
        let suggestion = new.into_suggestion();
        self.store.data.suggestions.insert(0, suggestion.clone());
        self.store.flush()?;
        Ok(suggestion)
    }

    pub fn update(&mut self, id: &str, patch: SuggestionPatch) -> Result<bool, AppError> {
        let matched = match find_mut(&mut self.store.data.suggestions, id) {
            Some(suggestion) => {
                patch.merge_into(suggestion);
                true
            }
            None => false,
        };
        self.store.commit(matched, "suggestion update", id)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, AppError> {
        let matched = remove_by_id(&mut self.store.data.suggestions, id);
        self.store.commit(matched, "suggestion remove", id)
    }

    pub fn vote(&mut self, id: &str, delta: i64) -> Result<bool, AppError> {
        let matched = match find_mut(&mut self.store.data.suggestions, id) {
            Some(suggestion) => {
                suggestion.votes = SUGGESTION_VOTE_FLOOR.apply(suggestion.votes, delta);
                true
            }
            None => false,
        };
        self.store.commit(matched, "suggestion vote", id)
    }

    /// Append a reply. Returns `None` when the suggestion does not exist.
    pub fn reply(&mut self, id: &str, reply: NewReply) -> Result<Option<Reply>, AppError> {
        let created = append_reply(&mut self.store.data.suggestions, id, reply);
        self.store.commit(created.is_some(), "suggestion reply", id)?;
        Ok(created)
    }

    pub fn remove_reply(&mut self, id: &str, reply_id: &str) -> Result<bool, AppError> {
        let matched = drop_reply(&mut self.store.data.suggestions, id, reply_id);
        self.store.commit(matched, "suggestion reply removal", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::memory_store;

    fn fix_gym() -> NewSuggestion {
        NewSuggestion {
            title: "Fix Gym".into(),
            description: "The treadmill has been broken for weeks.".into(),
            category: Category::Infrastructure,
            author_id: "guest-1".into(),
        }
    }

    fn reply(text: &str) -> NewReply {
        NewReply {
            text: text.into(),
            author_id: "guest-2".into(),
        }
    }

    #[test]
    fn test_fix_gym_scenario() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();

        let created = suggestions.add(fix_gym()).unwrap();
        assert_eq!(created.votes, 0);
        assert!(created.replies.is_empty());

        assert!(suggestions.vote(&created.id, 1).unwrap());
        assert!(suggestions.vote(&created.id, 1).unwrap());
        assert_eq!(suggestions.get(&created.id).unwrap().votes, 2);

        assert!(suggestions.remove(&created.id).unwrap());
        assert!(suggestions.all().iter().all(|s| s.id != created.id));
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();

        let first = suggestions.add(fix_gym()).unwrap();
        let second = suggestions.add(fix_gym()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(suggestions.all()[0].id, second.id);
        assert_eq!(suggestions.all()[1].id, first.id);
    }

    #[test]
    fn test_update_changes_only_patched_fields() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();
        let created = suggestions.add(fix_gym()).unwrap();

        let patch = SuggestionPatch {
            title: Some("Fix the gym treadmill".into()),
            ..Default::default()
        };
        assert!(suggestions.update(&created.id, patch).unwrap());

        let updated = suggestions.get(&created.id).unwrap();
        assert_eq!(updated.title, "Fix the gym treadmill");
        assert_eq!(
            Suggestion {
                title: created.title.clone(),
                ..updated.clone()
            },
            created
        );
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();
        suggestions.add(fix_gym()).unwrap();
        let before = suggestions.all().to_vec();

        let patch = SuggestionPatch {
            category: Some(Category::Canteen),
            ..Default::default()
        };
        assert!(!suggestions.update("missing", patch).unwrap());
        assert_eq!(suggestions.all(), before.as_slice());
    }

    #[test]
    fn test_remove_missing_id_keeps_size() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();
        suggestions.add(fix_gym()).unwrap();

        assert!(!suggestions.remove("missing").unwrap());
        assert_eq!(suggestions.all().len(), 1);
    }

    #[test]
    fn test_votes_floor_at_zero() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();
        let created = suggestions.add(fix_gym()).unwrap();

        suggestions.vote(&created.id, -1).unwrap();
        assert_eq!(suggestions.get(&created.id).unwrap().votes, 0);

        suggestions.vote(&created.id, 1).unwrap();
        suggestions.vote(&created.id, -1).unwrap();
        assert_eq!(suggestions.get(&created.id).unwrap().votes, 0);
    }

    #[test]
    fn test_replies_append_and_remove_in_order() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();
        let created = suggestions.add(fix_gym()).unwrap();

        let a = suggestions.reply(&created.id, reply("first")).unwrap().unwrap();
        let b = suggestions.reply(&created.id, reply("second")).unwrap().unwrap();
        let c = suggestions.reply(&created.id, reply("third")).unwrap().unwrap();

        assert!(suggestions.remove_reply(&created.id, &b.id).unwrap());
        let ids: Vec<_> = suggestions
            .get(&created.id)
            .unwrap()
            .replies
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec![a.id.clone(), c.id]);

        assert!(!suggestions.remove_reply(&created.id, &b.id).unwrap());
        assert!(!suggestions.remove_reply("missing", &a.id).unwrap());
    }

    #[test]
    fn test_reply_to_missing_suggestion() {
        let (mut store, _slots) = memory_store();
        let created = store.suggestions().reply("missing", reply("hello")).unwrap();
        assert!(created.is_none());
    }

    #[test]
    fn test_by_category_keeps_order() {
        let (mut store, _slots) = memory_store();
        let mut suggestions = store.suggestions();
        let gym = suggestions.add(fix_gym()).unwrap();
        suggestions
            .add(NewSuggestion {
                category: Category::Canteen,
                ..fix_gym()
            })
            .unwrap();
        let gym2 = suggestions.add(fix_gym()).unwrap();

        let ids: Vec<_> = suggestions
            .by_category(Category::Infrastructure)
            .into_iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(ids, vec![gym2.id, gym.id]);
        assert!(suggestions.by_category(Category::Exams).is_empty());
    }
}
