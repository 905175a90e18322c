#![allow(dead_code)]

use safeline_core::{Desk, DeskBuilder};
use tempfile::TempDir;

/// Helper function to create a test desk signed in as `username`
pub async fn create_test_desk(username: &str) -> (TempDir, Desk) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let desk = DeskBuilder::new()
        .with_database_path(Some(&db_path))
        .with_user(Some(username))
        .build()
        .await
        .expect("Failed to create desk");
    (temp_dir, desk)
}

/// A second desk on the same database, signed in as someone else
pub async fn reopen_as(temp_dir: &TempDir, username: &str) -> Desk {
    DeskBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_user(Some(username))
        .build()
        .await
        .expect("Failed to reopen desk")
}
