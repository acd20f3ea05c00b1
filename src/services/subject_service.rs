use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Subject, dto::request::CreateSubjectRequest},
    repositories::{CourseRepository, SubjectRepository},
};

pub struct SubjectService {
    subjects: Arc<dyn SubjectRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl SubjectService {
    pub fn new(subjects: Arc<dyn SubjectRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { subjects, courses }
    }

    /// A subject may only reference an existing course.
    pub async fn create_subject(
        &self,
        request: CreateSubjectRequest,
        instructor_id: Uuid,
    ) -> AppResult<Subject> {
        if self.courses.find_by_id(&request.course_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                request.course_id
            )));
        }

        let subject = Subject::new(&request.name, request.course_id, instructor_id);
        self.subjects.create(subject).await
    }

    pub async fn get_all_subjects(&self) -> AppResult<Vec<Subject>> {
        self.subjects.find_all().await
    }

    pub async fn get_subjects_by_course(&self, course_id: &Uuid) -> AppResult<Vec<Subject>> {
        self.subjects.find_by_course(course_id).await
    }

    pub async fn delete_subject(&self, id: &Uuid) -> AppResult<()> {
        self.subjects.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::course::{CourseDuration, Difficulty};
    use crate::models::domain::Course;
    use crate::repositories::course_repository::MockCourseRepository;
    use crate::repositories::subject_repository::MockSubjectRepository;

    #[tokio::test]
    async fn test_create_subject_requires_existing_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let subjects = MockSubjectRepository::new();

        let service = SubjectService::new(Arc::new(subjects), Arc::new(courses));
        let result = service
            .create_subject(
                CreateSubjectRequest {
                    name: "Ownership".to_string(),
                    course_id: Uuid::new_v4(),
                },
                Uuid::new_v4(),
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_subject_links_course() {
        let instructor_id = Uuid::new_v4();
        let course = Course::new(
            "Rust Basics",
            None,
            Difficulty::Beginner,
            CourseDuration::ThreeMonths,
            instructor_id,
        );
        let course_id = course.id;

        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(move |_| Ok(Some(course.clone())));

        let mut subjects = MockSubjectRepository::new();
        subjects.expect_create().returning(|s| Ok(s));

        let service = SubjectService::new(Arc::new(subjects), Arc::new(courses));
        let subject = service
            .create_subject(
                CreateSubjectRequest {
                    name: "Ownership".to_string(),
                    course_id,
                },
                instructor_id,
            )
            .await
            .unwrap();

        assert_eq!(subject.course_id, course_id);
        assert_eq!(subject.instructor_id, instructor_id);
    }
}
