use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::connection::FaqPool;

/// One stored question/answer pair and the category it is listed under.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl FaqEntry {
    pub async fn find_answer(
        pool: &FaqPool,
        question: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        match pool {
            FaqPool::Sqlite(pool) => {
                sqlx::query_scalar::<_, String>("SELECT answer FROM faq WHERE question = ?")
                    .bind(question)
                    .fetch_optional(pool)
                    .await
            }
            FaqPool::Postgres(pool) => {
                sqlx::query_scalar::<_, String>("SELECT answer FROM faq WHERE question = $1")
                    .bind(question)
                    .fetch_optional(pool)
                    .await
            }
        }
    }

    /// Distinct categories in store order.
    pub async fn distinct_categories(pool: &FaqPool) -> Result<Vec<String>, sqlx::Error> {
        match pool {
            FaqPool::Sqlite(pool) => {
                sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM faq")
                    .fetch_all(pool)
                    .await
            }
            FaqPool::Postgres(pool) => {
                sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM faq")
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Questions of one category in store order. No `ORDER BY`: numbering
    /// shown to users is recomputed from this on every lookup.
    pub async fn questions_by_category(
        pool: &FaqPool,
        category: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        match pool {
            FaqPool::Sqlite(pool) => {
                sqlx::query_scalar::<_, String>("SELECT question FROM faq WHERE category = ?")
                    .bind(category)
                    .fetch_all(pool)
                    .await
            }
            FaqPool::Postgres(pool) => {
                sqlx::query_scalar::<_, String>("SELECT question FROM faq WHERE category = $1")
                    .bind(category)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Inserts the entry or replaces the answer and category of an existing question.
    pub async fn upsert(&self, pool: &FaqPool) -> Result<(), sqlx::Error> {
        match pool {
            FaqPool::Sqlite(pool) => {
                sqlx::query(
                    r#"
                    INSERT INTO faq (question, answer, category)
                    VALUES (?, ?, ?)
                    ON CONFLICT (question) DO UPDATE
                    SET answer = excluded.answer, category = excluded.category
                    "#,
                )
                .bind(&self.question)
                .bind(&self.answer)
                .bind(&self.category)
                .execute(pool)
                .await?;
            }
            FaqPool::Postgres(pool) => {
                sqlx::query(
                    r#"
                    INSERT INTO faq (question, answer, category)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (question) DO UPDATE
                    SET answer = excluded.answer, category = excluded.category
                    "#,
                )
                .bind(&self.question)
                .bind(&self.answer)
                .bind(&self.category)
                .execute(pool)
                .await?;
            }
        }
        Ok(())
    }

    pub async fn count(pool: &FaqPool) -> Result<i64, sqlx::Error> {
        match pool {
            FaqPool::Sqlite(pool) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faq")
                    .fetch_one(pool)
                    .await
            }
            FaqPool::Postgres(pool) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faq")
                    .fetch_one(pool)
                    .await
            }
        }
    }
}
