use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Course duration is one of four fixed plans, serialized in the form the
/// frontend selects from ("3 Months", "6 Months", ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum CourseDuration {
    #[serde(rename = "3 Months")]
    ThreeMonths,
    #[serde(rename = "6 Months")]
    SixMonths,
    #[serde(rename = "9 Months")]
    NineMonths,
    #[serde(rename = "12 Months")]
    TwelveMonths,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub duration: CourseDuration,
    pub instructor_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Course {
    pub fn new(
        title: &str,
        description: Option<String>,
        difficulty: Difficulty,
        duration: CourseDuration,
        instructor_id: Uuid,
    ) -> Self {
        Course {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description,
            difficulty,
            duration,
            instructor_id,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_wire_format() {
        let json = serde_json::to_string(&CourseDuration::SixMonths).unwrap();
        assert_eq!(json, "\"6 Months\"");

        let parsed: CourseDuration = serde_json::from_str("\"12 Months\"").unwrap();
        assert_eq!(parsed, CourseDuration::TwelveMonths);
    }

    #[test]
    fn test_course_belongs_to_instructor() {
        let instructor_id = Uuid::new_v4();
        let course = Course::new(
            "Rust Basics",
            Some("An introduction".to_string()),
            Difficulty::Beginner,
            CourseDuration::ThreeMonths,
            instructor_id,
        );
        assert_eq!(course.instructor_id, instructor_id);
        assert!(course.created_at.is_some());
    }
}
