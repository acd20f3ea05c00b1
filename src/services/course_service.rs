use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Course, dto::request::CreateCourseRequest},
    repositories::CourseRepository,
};

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn create_course(
        &self,
        request: CreateCourseRequest,
        instructor_id: Uuid,
    ) -> AppResult<Course> {
        let course = Course::new(
            &request.title,
            request.description,
            request.difficulty,
            request.duration,
            instructor_id,
        );
        self.courses.create(course).await
    }

    pub async fn get_all_courses(&self) -> AppResult<Vec<Course>> {
        self.courses.find_all().await
    }

    pub async fn get_course(&self, id: &Uuid) -> AppResult<Course> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    pub async fn delete_course(&self, id: &Uuid) -> AppResult<()> {
        self.courses.delete(id).await
    }
}
