use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{course::Difficulty, Quiz, Role, User};

/// Payload of a successful login; the client persists every field of this
/// (token, role, id, the user blob) as its session state.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub role: Role,
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// User shape for HTTP responses; the stored password hash never leaves the
/// server.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// List shape for the lobby and management tables: everything but the
/// question list.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: Uuid,
    pub display_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub total_questions: u32,
    pub topic_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizSummary {
    fn from(quiz: Quiz) -> Self {
        QuizSummary {
            id: quiz.id,
            display_id: quiz.display_id,
            title: quiz.title,
            difficulty: quiz.difficulty,
            duration_minutes: quiz.duration_minutes,
            total_questions: quiz.total_questions,
            topic_id: quiz.topic_id,
            created_at: quiz.created_at,
        }
    }
}
