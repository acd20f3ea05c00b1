use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::QuizAttempt,
};

/// Attempts are insert-only; there is deliberately no update or delete.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
    async fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<QuizAttempt>>;
    async fn find_all(&self) -> AppResult<Vec<QuizAttempt>>;
}

pub struct MongoAttemptRepository {
    collection: Collection<QuizAttempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
        Self { collection }
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<QuizAttempt>> {
        // completedAt is stored as RFC 3339 UTC with fixed millisecond
        // precision, so a descending string sort is newest-first.
        let cursor = self
            .collection
            .find(doc! { "userId": user_id.to_string() })
            .sort(doc! { "completedAt": -1 })
            .await?;
        let attempts: Vec<QuizAttempt> = cursor.try_collect().await?;
        Ok(attempts)
    }

    async fn find_all(&self) -> AppResult<Vec<QuizAttempt>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "completedAt": -1 })
            .await?;
        let attempts: Vec<QuizAttempt> = cursor.try_collect().await?;
        Ok(attempts)
    }
}
