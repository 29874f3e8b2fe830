//! Demo rows inserted into empty remote tables on startup.

use super::Repository;
use crate::errors::AppError;
use crate::models::{InsertNote, InsertRequest, InsertSuggestion};

/// Seed each empty table. Tables that already hold rows are left alone.
pub async fn seed_database(repo: &Repository) -> Result<(), AppError> {
    if repo.list_suggestions().await?.is_empty() {
        repo.create_suggestion(&InsertSuggestion {
            author: "MockWalletAddress1".to_string(),
            title: "Extend Library Hours".to_string(),
            description: "We need the library to be open until midnight during exam week."
                .to_string(),
            category: "academics".to_string(),
        })
        .await?;
        repo.create_suggestion(&InsertSuggestion {
            author: "MockWalletAddress2".to_string(),
            title: "Fix Gym Equipment".to_string(),
            description: "The treadmill in the campus gym has been broken for weeks.".to_string(),
            category: "infrastructure".to_string(),
        })
        .await?;
        tracing::info!("Seeded demo suggestions");
    }

    if repo.list_notes().await?.is_empty() {
        repo.create_note(&InsertNote {
            author: "MockWalletAddress1".to_string(),
            subject: "CS101".to_string(),
            title: "Introduction to Algorithms".to_string(),
            ipfs_hash: "QmXoypizjW3WknFiJnKLwHCnL72vedxjQkDDP1mXWo6uco".to_string(),
        })
        .await?;
        repo.create_note(&InsertNote {
            author: "MockWalletAddress3".to_string(),
            subject: "MATH202".to_string(),
            title: "Calculus II Midterm Review".to_string(),
            ipfs_hash: "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_string(),
        })
        .await?;
        tracing::info!("Seeded demo notes");
    }

    if repo.list_requests().await?.is_empty() {
        repo.create_request(&InsertRequest {
            author: "MockWalletAddress2".to_string(),
            subject: "PHYS101".to_string(),
            description: "Looking for notes on Quantum Mechanics basics.".to_string(),
        })
        .await?;
        tracing::info!("Seeded demo note requests");
    }

    Ok(())
}
