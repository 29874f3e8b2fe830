//! Database repository for the remote API tables.
//!
//! Rows are insert-and-list only; each insert gets a mock authenticity token.

use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    timestamp_now, InsertNote, InsertRequest, InsertSuggestion, NoteRow, RequestRow,
    SuggestionRow,
};

/// Database repository for all remote data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== SUGGESTION OPERATIONS ====================

    /// List all suggestions in insertion order.
    pub async fn list_suggestions(&self) -> Result<Vec<SuggestionRow>, AppError> {
        let rows = sqlx::query(
            "SELECT id, pubkey, author, title, description, category, vote_count, created_at FROM suggestions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(suggestion_from_row).collect())
    }

    /// Insert a suggestion and return the stored row.
    pub async fn create_suggestion(
        &self,
        insert: &InsertSuggestion,
    ) -> Result<SuggestionRow, AppError> {
        let pubkey = mock_pubkey();
        let now = timestamp_now();

        let result = sqlx::query(
            "INSERT INTO suggestions (pubkey, author, title, description, category, vote_count, created_at) VALUES (?, ?, ?, ?, ?, 0, ?)",
        )
        .bind(&pubkey)
        .bind(&insert.author)
        .bind(&insert.title)
        .bind(&insert.description)
        .bind(&insert.category)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(SuggestionRow {
            id: result.last_insert_rowid(),
            pubkey,
            author: insert.author.clone(),
            title: insert.title.clone(),
            description: insert.description.clone(),
            category: insert.category.clone(),
            vote_count: 0,
            created_at: now,
        })
    }

    // ==================== NOTE OPERATIONS ====================

    /// List all notes in insertion order.
    pub async fn list_notes(&self) -> Result<Vec<NoteRow>, AppError> {
        let rows = sqlx::query(
            "SELECT id, pubkey, author, subject, title, ipfs_hash, created_at FROM notes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    /// Insert a note and return the stored row.
    pub async fn create_note(&self, insert: &InsertNote) -> Result<NoteRow, AppError> {
        let pubkey = mock_pubkey();
        let now = timestamp_now();

        let result = sqlx::query(
            "INSERT INTO notes (pubkey, author, subject, title, ipfs_hash, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&pubkey)
        .bind(&insert.author)
        .bind(&insert.subject)
        .bind(&insert.title)
        .bind(&insert.ipfs_hash)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(NoteRow {
            id: result.last_insert_rowid(),
            pubkey,
            author: insert.author.clone(),
            subject: insert.subject.clone(),
            title: insert.title.clone(),
            ipfs_hash: insert.ipfs_hash.clone(),
            created_at: now,
        })
    }

    // ==================== REQUEST OPERATIONS ====================

    /// List all note requests in insertion order.
    pub async fn list_requests(&self) -> Result<Vec<RequestRow>, AppError> {
        let rows = sqlx::query(
            "SELECT id, pubkey, author, subject, description, is_fulfilled, created_at FROM requests ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(request_from_row).collect())
    }

    /// Insert a note request and return the stored row.
    pub async fn create_request(&self, insert: &InsertRequest) -> Result<RequestRow, AppError> {
        let pubkey = mock_pubkey();
        let now = timestamp_now();

        let result = sqlx::query(
            "INSERT INTO requests (pubkey, author, subject, description, is_fulfilled, created_at) VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(&pubkey)
        .bind(&insert.author)
        .bind(&insert.subject)
        .bind(&insert.description)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(RequestRow {
            id: result.last_insert_rowid(),
            pubkey,
            author: insert.author.clone(),
            subject: insert.subject.clone(),
            description: insert.description.clone(),
            is_fulfilled: false,
            created_at: now,
        })
    }
}

/// Stand-in for an on-chain account address: `MockPubkey-` plus a short base36 suffix.
fn mock_pubkey() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .filter(|c| !c.is_ascii_uppercase())
        .take(6)
        .map(char::from)
        .collect();
    format!("MockPubkey-{}", suffix)
}

// Helper functions for row conversion

fn suggestion_from_row(row: &sqlx::sqlite::SqliteRow) -> SuggestionRow {
    SuggestionRow {
        id: row.get("id"),
        pubkey: row.get("pubkey"),
        author: row.get("author"),
        title: row.get("title"),
        description: row.get("description"),
        category: row.get("category"),
        vote_count: row.get("vote_count"),
        created_at: row.get("created_at"),
    }
}

fn note_from_row(row: &sqlx::sqlite::SqliteRow) -> NoteRow {
    NoteRow {
        id: row.get("id"),
        pubkey: row.get("pubkey"),
        author: row.get("author"),
        subject: row.get("subject"),
        title: row.get("title"),
        ipfs_hash: row.get("ipfs_hash"),
        created_at: row.get("created_at"),
    }
}

fn request_from_row(row: &sqlx::sqlite::SqliteRow) -> RequestRow {
    let is_fulfilled: i32 = row.get("is_fulfilled");
    RequestRow {
        id: row.get("id"),
        pubkey: row.get("pubkey"),
        author: row.get("author"),
        subject: row.get("subject"),
        description: row.get("description"),
        is_fulfilled: is_fulfilled != 0,
        created_at: row.get("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    #[test]
    fn test_mock_pubkey_shape() {
        let key = mock_pubkey();
        let suffix = key.strip_prefix("MockPubkey-").unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[tokio::test]
    async fn test_rows_list_in_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .unwrap();
        let repo = Repository::new(pool);

        let first = repo
            .create_request(&InsertRequest {
                author: "MockWalletAddress2".into(),
                subject: "PHYS101".into(),
                description: "Quantum mechanics basics".into(),
            })
            .await
            .unwrap();
        let second = repo
            .create_request(&InsertRequest {
                author: "MockWalletAddress3".into(),
                subject: "CHEM110".into(),
                description: "Organic chemistry lab write-ups".into(),
            })
            .await
            .unwrap();

        let rows = repo.list_requests().await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(rows.iter().all(|r| !r.is_fulfilled));
        assert_ne!(first.pubkey, "");
    }
}
