use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Course,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn find_all(&self) -> AppResult<Vec<Course>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Course>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("courses");
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        self.collection.insert_one(&course).await?;
        Ok(course)
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let cursor = self.collection.find(doc! {}).await?;
        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Course>> {
        let course = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(course)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
