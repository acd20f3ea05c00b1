use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Material,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn create(&self, material: Material) -> AppResult<Material>;
    async fn find_by_topic(&self, topic_id: &Uuid) -> AppResult<Vec<Material>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Material>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct MongoMaterialRepository {
    collection: Collection<Material>,
}

impl MongoMaterialRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("materials");
        Self { collection }
    }
}

#[async_trait]
impl MaterialRepository for MongoMaterialRepository {
    async fn create(&self, material: Material) -> AppResult<Material> {
        self.collection.insert_one(&material).await?;
        Ok(material)
    }

    async fn find_by_topic(&self, topic_id: &Uuid) -> AppResult<Vec<Material>> {
        let cursor = self
            .collection
            .find(doc! { "topicId": topic_id.to_string() })
            .await?;
        let materials: Vec<Material> = cursor.try_collect().await?;
        Ok(materials)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Material>> {
        let material = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(material)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Material with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
