use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Topic,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create(&self, topic: Topic) -> AppResult<Topic>;
    async fn find_all(&self) -> AppResult<Vec<Topic>>;
    async fn find_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Topic>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Topic>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct MongoTopicRepository {
    collection: Collection<Topic>,
}

impl MongoTopicRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("topics");
        Self { collection }
    }
}

#[async_trait]
impl TopicRepository for MongoTopicRepository {
    async fn create(&self, topic: Topic) -> AppResult<Topic> {
        self.collection.insert_one(&topic).await?;
        Ok(topic)
    }

    async fn find_all(&self) -> AppResult<Vec<Topic>> {
        let cursor = self.collection.find(doc! {}).await?;
        let topics: Vec<Topic> = cursor.try_collect().await?;
        Ok(topics)
    }

    async fn find_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Topic>> {
        let cursor = self
            .collection
            .find(doc! { "subjectId": subject_id.to_string() })
            .await?;
        let topics: Vec<Topic> = cursor.try_collect().await?;
        Ok(topics)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Topic>> {
        let topic = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(topic)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Topic with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
