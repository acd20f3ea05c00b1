use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One scored submission of a quiz. Written exactly once and never updated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    /// Also the descending sort key in storage; serialized with fixed
    /// millisecond precision so the RFC 3339 strings order by instant.
    #[serde(with = "rfc3339_millis")]
    pub completed_at: DateTime<Utc>,
}

mod rfc3339_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

impl QuizAttempt {
    pub fn new(
        user_id: Uuid,
        quiz_id: Uuid,
        score: u32,
        total_questions: u32,
        completed_at: DateTime<Utc>,
    ) -> Self {
        QuizAttempt {
            id: Uuid::new_v4(),
            user_id,
            quiz_id,
            score,
            total_questions,
            percentage: percentage_of(score, total_questions),
            completed_at,
        }
    }
}

/// round(100 * score / total); an empty quiz scores 0%, not a division error.
pub fn percentage_of(score: u32, total_questions: u32) -> u32 {
    if total_questions == 0 {
        return 0;
    }
    (100.0 * score as f64 / total_questions as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage_of(2, 3), 67);
        assert_eq!(percentage_of(1, 3), 33);
        assert_eq!(percentage_of(3, 3), 100);
        assert_eq!(percentage_of(0, 5), 0);
    }

    #[test]
    fn test_percentage_of_empty_quiz_is_zero() {
        assert_eq!(percentage_of(0, 0), 0);
    }

    #[test]
    fn test_completed_at_strings_sort_by_instant() {
        use chrono::TimeZone;

        // A whole-second timestamp must not sort after one half a second
        // later just because the shorter rendering ends in 'Z'.
        let on_the_second = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 1).unwrap();
        let half_second_later = on_the_second + chrono::Duration::milliseconds(500);

        let earlier = QuizAttempt::new(Uuid::new_v4(), Uuid::new_v4(), 1, 1, on_the_second);
        let later = QuizAttempt::new(Uuid::new_v4(), Uuid::new_v4(), 1, 1, half_second_later);

        let earlier_str = serde_json::to_value(&earlier).unwrap()["completedAt"]
            .as_str()
            .unwrap()
            .to_string();
        let later_str = serde_json::to_value(&later).unwrap()["completedAt"]
            .as_str()
            .unwrap()
            .to_string();

        assert_eq!(earlier_str, "2026-01-01T12:00:01.000Z");
        assert!(earlier_str < later_str);

        let round_tripped: QuizAttempt =
            serde_json::from_value(serde_json::to_value(&earlier).unwrap()).unwrap();
        assert_eq!(round_tripped.completed_at, on_the_second);
    }

    #[test]
    fn test_attempt_wire_field_names() {
        let attempt = QuizAttempt::new(Uuid::new_v4(), Uuid::new_v4(), 2, 3, Utc::now());
        let json = serde_json::to_value(&attempt).unwrap();
        assert_eq!(json["score"], 2);
        assert_eq!(json["totalQuestions"], 3);
        assert_eq!(json["percentage"], 67);
        assert!(json.get("completedAt").is_some());
    }
}
