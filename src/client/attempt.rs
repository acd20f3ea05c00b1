use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{attempt::percentage_of, Question, Quiz, QuizAttempt},
        dto::request::SubmitAttemptRequest,
    },
};

/// Every attempt gets the same fixed window regardless of quiz metadata.
pub const QUIZ_SESSION_SECONDS: u64 = 600;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptResult {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
}

/// Transmits a finished attempt to the server.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AttemptSubmitter: Send + Sync {
    async fn send(&self, request: SubmitAttemptRequest) -> AppResult<QuizAttempt>;
}

/// One in-progress quiz session. Holds the quiz, the partial answer map and
/// the countdown; produces at most one scored result over its lifetime.
pub struct AttemptEngine {
    quiz: Quiz,
    user_id: Uuid,
    current: usize,
    answers: HashMap<Uuid, String>,
    remaining_seconds: u64,
    submitted: bool,
}

impl AttemptEngine {
    pub fn new(quiz: Quiz, user_id: Uuid) -> Self {
        Self::with_time_limit(quiz, user_id, QUIZ_SESSION_SECONDS)
    }

    pub fn with_time_limit(quiz: Quiz, user_id: Uuid, seconds: u64) -> Self {
        Self {
            quiz,
            user_id,
            current: 0,
            answers: HashMap::new(),
            remaining_seconds: seconds,
            submitted: false,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current)
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn selected_answer(&self, question_id: &Uuid) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Records (or overwrites) the answer for the current question. The
    /// option must be one of the offered choices.
    pub fn select_answer(&mut self, option: &str) -> AppResult<()> {
        let question = self.current_question().ok_or_else(|| {
            AppError::Validation("No question at the current position".to_string())
        })?;

        if !question.options.iter().any(|o| o == option) {
            return Err(AppError::Validation(format!(
                "'{}' is not one of the offered options",
                option
            )));
        }

        let id = question.id;
        self.answers.insert(id, option.to_string());
        Ok(())
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.quiz.questions.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// One elapsed second. Returns true exactly once, on the tick that
    /// exhausts the clock; the caller reacts by auto-submitting.
    pub fn tick(&mut self) -> bool {
        if self.submitted || self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        self.remaining_seconds == 0
    }

    /// Scores the attempt. Idempotent: only the first call returns a result;
    /// anything after is None, so a double submit cannot double-count.
    pub fn submit(&mut self) -> Option<AttemptResult> {
        if self.submitted {
            return None;
        }
        self.submitted = true;

        let score = self
            .quiz
            .questions
            .iter()
            .filter(|q| {
                self.answers
                    .get(&q.id)
                    .is_some_and(|selected| *selected == q.correct_answer)
            })
            .count() as u32;
        let total_questions = self.quiz.questions.len() as u32;

        Some(AttemptResult {
            score,
            total_questions,
            percentage: percentage_of(score, total_questions),
        })
    }

    /// Submits and transmits the attempt. Transport failure is logged and
    /// the local result still returned; the score on screen never depends
    /// on the network.
    pub async fn submit_and_send(
        &mut self,
        submitter: &dyn AttemptSubmitter,
    ) -> Option<AttemptResult> {
        let result = self.submit()?;

        let request = SubmitAttemptRequest {
            user_id: self.user_id,
            quiz_id: self.quiz.id,
            score: result.score,
            total_questions: result.total_questions,
            completed_at: Some(Utc::now()),
        };

        if let Err(e) = submitter.send(request).await {
            log::warn!("failed to record attempt on the server: {}", e);
        }

        Some(result)
    }
}

/// Drives the countdown at one tick per second and auto-submits when the
/// clock runs out. Ends as soon as the attempt is submitted; dropping the
/// task abandons the session without submitting.
pub async fn run_countdown(
    engine: Arc<tokio::sync::Mutex<AttemptEngine>>,
    submitter: Arc<dyn AttemptSubmitter>,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;
        let mut engine = engine.lock().await;
        if engine.is_submitted() {
            return;
        }
        if engine.tick() {
            engine.submit_and_send(submitter.as_ref()).await;
            return;
        }
    }
}
