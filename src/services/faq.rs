//! Read access to the FAQ table.
//!
//! The typed methods (`answer`, `categories`, `questions`) report failures as
//! [`StoreError`] so callers can pick a user-facing message. The `*_for` / `*_in`
//! helpers keep the never-failing contract: sentinel strings and empty lists.

use thiserror::Error;

use crate::database::{connection::DatabaseManager, models::FaqEntry};
use crate::utils::logging::{log_database_error, log_database_operation};

/// Returned by [`FaqStore::answer_for`] when no question matches exactly.
pub const NO_ANSWER_FOUND: &str = "Sorry, no answer found.";
/// Returned by [`FaqStore::answer_for`] when the store could not be queried.
pub const ANSWER_LOOKUP_FAILED: &str = "An error occurred while fetching the answer.";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("FAQ store unavailable: {0}")]
    Unavailable(sqlx::Error),
    #[error("FAQ query failed: {0}")]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => StoreError::Unavailable(error),
            other => StoreError::Query(other),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FaqStore {
    db: DatabaseManager,
}

impl FaqStore {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseManager {
        &self.db
    }

    pub async fn answer(&self, question: &str) -> Result<Option<String>, StoreError> {
        log_database_operation("SELECT answer", "faq", Some(question));
        Ok(FaqEntry::find_answer(&self.db.pool, question).await?)
    }

    pub async fn categories(&self) -> Result<Vec<String>, StoreError> {
        log_database_operation("SELECT DISTINCT category", "faq", None);
        Ok(FaqEntry::distinct_categories(&self.db.pool).await?)
    }

    pub async fn questions(&self, category: &str) -> Result<Vec<String>, StoreError> {
        log_database_operation("SELECT question", "faq", Some(category));
        let questions = FaqEntry::questions_by_category(&self.db.pool, category).await?;
        tracing::debug!("Questions in category '{}': {:?}", category, questions);
        Ok(questions)
    }

    /// Stored answer for an exact question match, or a sentinel string.
    pub async fn answer_for(&self, question: &str) -> String {
        match self.answer(question).await {
            Ok(Some(answer)) => answer,
            Ok(None) => {
                tracing::debug!("No answer stored for question '{}'", question);
                NO_ANSWER_FOUND.to_string()
            }
            Err(e) => {
                log_database_error("SELECT answer", "faq", &e.to_string(), Some(question));
                ANSWER_LOOKUP_FAILED.to_string()
            }
        }
    }

    /// All categories, or an empty list if the store failed.
    pub async fn distinct_categories(&self) -> Vec<String> {
        self.categories().await.unwrap_or_else(|e| {
            log_database_error("SELECT DISTINCT category", "faq", &e.to_string(), None);
            Vec::new()
        })
    }

    /// Questions of `category`, or an empty list on no match or store failure.
    pub async fn questions_in(&self, category: &str) -> Vec<String> {
        self.questions(category).await.unwrap_or_else(|e| {
            log_database_error("SELECT question", "faq", &e.to_string(), Some(category));
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_row_errors_are_query_failures() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Query(_)
        ));
    }
}
