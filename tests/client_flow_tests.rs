use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;
use uuid::Uuid;

use skillforge_server::{
    auth::JwtService,
    client::{
        attempt::AttemptSubmitter, decide, root_redirect, AttemptEngine, MemoryStore,
        RouteAccess, Session,
    },
    errors::AppResult,
    models::{
        domain::{course::Difficulty, Question, Quiz, QuizAttempt, Role, User},
        dto::{request::SubmitAttemptRequest, response::AuthResponse},
    },
};

fn signed_in_session(role: Role) -> Session<MemoryStore> {
    let jwt = JwtService::new(&SecretString::from("client_flow_test_secret".to_string()), 1);
    let user = User::new("Casey", "casey@example.com", "salt$hash", role);
    let session = Session::new(MemoryStore::new());
    session.establish(&AuthResponse {
        token: jwt.create_token(&user).unwrap(),
        role: user.role,
        id: user.id,
        email: user.email,
        name: user.name,
    });
    session
}

fn three_question_quiz() -> Quiz {
    Quiz::new(
        "Rust Fundamentals",
        Difficulty::Beginner,
        Uuid::new_v4(),
        vec![
            Question::new("Q1?", vec!["a".into(), "b".into()], "a", 1),
            Question::new("Q2?", vec!["a".into(), "b".into()], "b", 1),
            Question::new("Q3?", vec!["a".into(), "b".into()], "a", 1),
        ],
    )
}

/// Counts transmissions instead of performing them.
struct CountingSubmitter {
    sent: AtomicUsize,
}

impl CountingSubmitter {
    fn new() -> Self {
        Self {
            sent: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AttemptSubmitter for CountingSubmitter {
    async fn send(&self, request: SubmitAttemptRequest) -> AppResult<QuizAttempt> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(QuizAttempt::new(
            request.user_id,
            request.quiz_id,
            request.score,
            request.total_questions,
            request.completed_at.unwrap_or_else(Utc::now),
        ))
    }
}

#[test]
fn test_student_journey_through_the_guard() {
    // Not signed in: any protected path bounces to login, keeping the path.
    assert_eq!(
        decide("/student/dashboard", false, None),
        RouteAccess::RedirectToLogin {
            from: "/student/dashboard".to_string()
        }
    );

    let session = signed_in_session(Role::Student);
    assert_eq!(
        root_redirect(session.is_authenticated(), session.role()),
        "/student/dashboard"
    );

    // Wrong-role navigation is forbidden but the session survives it.
    assert_eq!(
        decide("/instructor", session.is_authenticated(), session.role()),
        RouteAccess::RedirectToForbidden
    );
    assert!(session.is_authenticated());

    // Logging out flips every decision back to the login redirect.
    session.clear();
    assert_eq!(root_redirect(session.is_authenticated(), session.role()), "/login");
}

#[tokio::test]
async fn test_full_attempt_lifecycle_transmits_once() {
    let session = signed_in_session(Role::Student);
    let user_id = session.user_id().unwrap();

    let mut engine = AttemptEngine::new(three_question_quiz(), user_id);
    engine.select_answer("a").unwrap();
    engine.next();
    engine.select_answer("b").unwrap();
    engine.next();
    engine.select_answer("b").unwrap();

    let submitter = CountingSubmitter::new();
    let result = engine.submit_and_send(&submitter).await.unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(result.percentage, 67);

    // A second submit is a no-op; nothing else goes over the wire.
    assert!(engine.submit_and_send(&submitter).await.is_none());
    assert_eq!(submitter.sent.load(Ordering::SeqCst), 1);
}
