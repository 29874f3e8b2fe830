//! Suggestion model for the campus suggestions board.

use serde::{Deserialize, Serialize};

use super::Reply;

/// Area of campus life a suggestion is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academics,
    Infrastructure,
    Exams,
    Canteen,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Academics,
        Category::Infrastructure,
        Category::Exams,
        Category::Canteen,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academics => "academics",
            Category::Infrastructure => "infrastructure",
            Category::Exams => "exams",
            Category::Canteen => "canteen",
            Category::Other => "other",
        }
    }

    /// Case-insensitive lookup, so board filters like "Canteen" match.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// A suggestion posted to the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub created_at: String,
    pub author_id: String,
    pub votes: i64,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// Request body for creating a suggestion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuggestion {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub author_id: String,
}

impl NewSuggestion {
    pub fn into_suggestion(self) -> Suggestion {
        Suggestion {
            id: super::new_id(),
            title: self.title,
            description: self.description,
            category: self.category,
            created_at: super::timestamp_now(),
            author_id: self.author_id,
            votes: 0,
            replies: Vec::new(),
        }
    }
}

/// Partial update for a suggestion. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl SuggestionPatch {
    pub fn merge_into(self, suggestion: &mut Suggestion) {
        if let Some(title) = self.title {
            suggestion.title = title;
        }
        if let Some(description) = self.description {
            suggestion.description = description;
        }
        if let Some(category) = self.category {
            suggestion.category = category;
        }
    }
}
