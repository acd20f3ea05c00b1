use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::course::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: i32,
}

impl Question {
    pub fn new(text: &str, options: Vec<String>, correct_answer: &str, points: i32) -> Self {
        Question {
            id: Uuid::new_v4(),
            text: text.to_string(),
            options,
            correct_answer: correct_answer.to_string(),
            points,
        }
    }
}

/// `display_id` is the public-facing code students enter in the lobby,
/// distinct from the internal id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub display_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub total_questions: u32,
    pub topic_id: Uuid,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(
        title: &str,
        difficulty: Difficulty,
        topic_id: Uuid,
        questions: Vec<Question>,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4(),
            display_id: Self::generate_display_id(),
            title: title.to_string(),
            difficulty,
            duration_minutes: 10,
            total_questions: questions.len() as u32,
            topic_id,
            questions,
            created_at: Some(Utc::now()),
        }
    }

    /// A fresh random code avoids duplicate-key collisions on insert.
    fn generate_display_id() -> String {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase();
        format!("QZ-{suffix}")
    }
}
