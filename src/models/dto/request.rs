use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::course::{CourseDuration, Difficulty};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    // Defaults to STUDENT when absent; normalized before comparison.
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub description: Option<String>,

    pub difficulty: Difficulty,

    pub duration: CourseDuration,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub course_id: Uuid,
}

/// Topic creation arrives as multipart so PDF/VIDEO topics can carry their
/// file in the same request. TEXT topics use `content`, LINK topics `url`.
#[derive(Debug, MultipartForm)]
pub struct CreateTopicForm {
    pub name: Text<String>,
    #[multipart(rename = "type")]
    pub kind: Text<String>,
    #[multipart(rename = "subjectId")]
    pub subject_id: Text<Uuid>,
    pub content: Option<Text<String>>,
    pub url: Option<Text<String>>,
    #[multipart(limit = "25MB")]
    pub file: Option<TempFile>,
}

#[derive(Debug, MultipartForm)]
pub struct UploadMaterialForm {
    pub title: Text<String>,
    #[multipart(rename = "type")]
    pub kind: Text<String>,
    #[multipart(rename = "topicId")]
    pub topic_id: Text<Uuid>,
    pub url: Option<Text<String>>,
    #[multipart(limit = "25MB")]
    pub file: Option<TempFile>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,

    pub topic_id: Uuid,

    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptRequest {
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub score: u32,
    pub total_questions: u32,
    pub completed_at: Option<DateTime<Utc>>,
}
