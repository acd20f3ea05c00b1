use crate::models::domain::{course::Difficulty, Question, Quiz, Role, User};
use uuid::Uuid;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a test user with the given role
    pub fn test_user(role: Role) -> User {
        let label = role.as_str().to_lowercase();
        User::new(
            &format!("Test {}", label),
            &format!("{}@example.com", label),
            "salt$hash",
            role,
        )
    }

    /// One user of every role
    pub fn test_users() -> Vec<User> {
        vec![
            test_user(Role::Student),
            test_user(Role::Instructor),
            test_user(Role::Admin),
        ]
    }

    /// A three-question quiz with a fixed display id
    pub fn sample_quiz() -> Quiz {
        let mut quiz = Quiz::new(
            "Rust Fundamentals",
            Difficulty::Beginner,
            Uuid::new_v4(),
            vec![
                Question::new(
                    "Which keyword introduces a binding?",
                    vec!["let".into(), "var".into(), "def".into(), "dim".into()],
                    "let",
                    1,
                ),
                Question::new(
                    "What does the ? operator do?",
                    vec![
                        "Propagates errors".into(),
                        "Panics".into(),
                        "Ignores errors".into(),
                        "Retries".into(),
                    ],
                    "Propagates errors",
                    1,
                ),
                Question::new(
                    "Which type owns a heap string?",
                    vec!["String".into(), "&str".into(), "char".into(), "u8".into()],
                    "String",
                    1,
                ),
            ],
        );
        quiz.display_id = "QUIZ001".to_string();
        quiz
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_fixtures_cover_all_roles() {
        let users = test_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].role, Role::Student);
        assert_eq!(users[2].role, Role::Admin);
    }

    #[test]
    fn test_sample_quiz_shape() {
        let quiz = sample_quiz();
        assert_eq!(quiz.display_id, "QUIZ001");
        assert_eq!(quiz.total_questions, 3);
    }
}
