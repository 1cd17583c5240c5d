#![allow(dead_code)]

use enrollai_faq_bot::database::{connection::DatabaseManager, models::FaqEntry};
use enrollai_faq_bot::services::faq::FaqStore;
use tempfile::TempDir;

/// Helper function to create a migrated test database
pub async fn create_test_db() -> (DatabaseManager, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let db = DatabaseManager::new(&db_url)
        .await
        .expect("Failed to create test database");

    db.run_migrations().await.expect("Failed to run migrations");

    (db, temp_dir)
}

pub async fn insert_entry(db: &DatabaseManager, question: &str, answer: &str, category: &str) {
    FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
    }
    .upsert(&db.pool)
    .await
    .expect("Failed to insert FAQ entry");
}

/// A store holding two "Visas" questions and one "Admissions" question.
pub async fn create_seeded_store() -> (FaqStore, TempDir) {
    let (db, temp_dir) = create_test_db().await;

    insert_entry(&db, "Q1", "Answer one", "Visas").await;
    insert_entry(&db, "Q2", "Answer two\\nwith a second line", "Visas").await;
    insert_entry(&db, "What is Universitaly?", "The national pre-enrollment portal.", "Admissions").await;

    (FaqStore::new(db), temp_dir)
}
