use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subject always references an existing course; SubjectService validates
/// the reference before insertion.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub instructor_id: Uuid,
}

impl Subject {
    pub fn new(name: &str, course_id: Uuid, instructor_id: Uuid) -> Self {
        Subject {
            id: Uuid::new_v4(),
            name: name.to_string(),
            course_id,
            instructor_id,
        }
    }
}
