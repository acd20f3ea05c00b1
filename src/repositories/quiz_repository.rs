use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::Quiz,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_all(&self) -> AppResult<Vec<Quiz>>;
    async fn find_by_topic(&self, topic_id: &Uuid) -> AppResult<Vec<Quiz>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Quiz>>;
    async fn find_by_display_id(&self, display_id: &str) -> AppResult<Option<Quiz>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let cursor = self.collection.find(doc! {}).await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn find_by_topic(&self, topic_id: &Uuid) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .collection
            .find(doc! { "topicId": topic_id.to_string() })
            .await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(quiz)
    }

    async fn find_by_display_id(&self, display_id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "displayId": display_id })
            .await?;
        Ok(quiz)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "displayId": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("created unique index on quizzes.displayId");

        Ok(())
    }
}
