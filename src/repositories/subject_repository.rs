use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Subject,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create(&self, subject: Subject) -> AppResult<Subject>;
    async fn find_all(&self) -> AppResult<Vec<Subject>>;
    async fn find_by_course(&self, course_id: &Uuid) -> AppResult<Vec<Subject>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Subject>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct MongoSubjectRepository {
    collection: Collection<Subject>,
}

impl MongoSubjectRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("subjects");
        Self { collection }
    }
}

#[async_trait]
impl SubjectRepository for MongoSubjectRepository {
    async fn create(&self, subject: Subject) -> AppResult<Subject> {
        self.collection.insert_one(&subject).await?;
        Ok(subject)
    }

    async fn find_all(&self) -> AppResult<Vec<Subject>> {
        let cursor = self.collection.find(doc! {}).await?;
        let subjects: Vec<Subject> = cursor.try_collect().await?;
        Ok(subjects)
    }

    async fn find_by_course(&self, course_id: &Uuid) -> AppResult<Vec<Subject>> {
        let cursor = self
            .collection
            .find(doc! { "courseId": course_id.to_string() })
            .await?;
        let subjects: Vec<Subject> = cursor.try_collect().await?;
        Ok(subjects)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Subject>> {
        let subject = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(subject)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Subject with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
