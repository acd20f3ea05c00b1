use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{course::Difficulty, Question, Quiz, QuizAttempt},
        dto::{
            request::{GenerateQuizRequest, SubmitAttemptRequest},
            response::QuizSummary,
        },
    },
    repositories::{AttemptRepository, QuizRepository, TopicRepository},
    services::quiz_generator::QuizGenerator,
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn AttemptRepository>,
    topics: Arc<dyn TopicRepository>,
    generator: Arc<dyn QuizGenerator>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        attempts: Arc<dyn AttemptRepository>,
        topics: Arc<dyn TopicRepository>,
        generator: Arc<dyn QuizGenerator>,
    ) -> Self {
        Self {
            quizzes,
            attempts,
            topics,
            generator,
        }
    }

    /// Generates questions for the topic and persists the quiz. A provider
    /// failure is not fatal; the quiz is saved with simulated questions so
    /// instructors can keep working offline.
    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<Quiz> {
        let topic = self
            .topics
            .find_by_id(&request.topic_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Topic with id '{}' not found", request.topic_id))
            })?;

        let questions = match self.generator.generate(&request.title, &topic.name).await {
            Ok(generated) => generated
                .into_iter()
                .map(|q| Question::new(&q.text, q.options, &q.correct_answer, q.points))
                .collect(),
            Err(e) => {
                log::warn!("question generation failed, using simulated set: {}", e);
                fallback_questions(&request.title)
            }
        };

        let quiz = Quiz::new(
            &request.title,
            request.difficulty.unwrap_or(Difficulty::Beginner),
            request.topic_id,
            questions,
        );
        self.quizzes.create(quiz).await
    }

    pub async fn get_all_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.find_all().await
    }

    pub async fn get_quiz_summaries(&self) -> AppResult<Vec<QuizSummary>> {
        let quizzes = self.quizzes.find_all().await?;
        Ok(quizzes.into_iter().map(QuizSummary::from).collect())
    }

    pub async fn get_quizzes_by_topic(&self, topic_id: &Uuid) -> AppResult<Vec<Quiz>> {
        self.quizzes.find_by_topic(topic_id).await
    }

    /// Lobby lookup by the public quiz code.
    pub async fn get_quiz_by_display_id(&self, display_id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_display_id(display_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz '{}' not found", display_id)))
    }

    pub async fn save_attempt(&self, request: SubmitAttemptRequest) -> AppResult<QuizAttempt> {
        if request.score > request.total_questions {
            return Err(AppError::Validation(
                "Score cannot exceed the number of questions".to_string(),
            ));
        }

        if self.quizzes.find_by_id(&request.quiz_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                request.quiz_id
            )));
        }

        let attempt = QuizAttempt::new(
            request.user_id,
            request.quiz_id,
            request.score,
            request.total_questions,
            request.completed_at.unwrap_or_else(Utc::now),
        );
        self.attempts.create(attempt).await
    }

    pub async fn get_attempts_by_user(&self, user_id: &Uuid) -> AppResult<Vec<QuizAttempt>> {
        self.attempts.find_by_user(user_id).await
    }

    pub async fn get_all_attempts(&self) -> AppResult<Vec<QuizAttempt>> {
        self.attempts.find_all().await
    }
}

/// Stand-in question set used when the provider is unreachable.
fn fallback_questions(title: &str) -> Vec<Question> {
    (1..=5)
        .map(|i| {
            Question::new(
                &format!("Simulated Question #{} for {}?", i, title),
                vec![
                    "Option Alpha".to_string(),
                    "Option Beta".to_string(),
                    "Option Gamma".to_string(),
                    "Option Delta".to_string(),
                ],
                "Option Alpha",
                1,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Topic;
    use crate::repositories::attempt_repository::MockAttemptRepository;
    use crate::repositories::quiz_repository::MockQuizRepository;
    use crate::repositories::topic_repository::MockTopicRepository;
    use crate::services::quiz_generator::{GeneratedQuestion, MockQuizGenerator};

    fn service_with(
        quizzes: MockQuizRepository,
        attempts: MockAttemptRepository,
        topics: MockTopicRepository,
        generator: MockQuizGenerator,
    ) -> QuizService {
        QuizService::new(
            Arc::new(quizzes),
            Arc::new(attempts),
            Arc::new(topics),
            Arc::new(generator),
        )
    }

    fn existing_topic() -> (MockTopicRepository, Uuid) {
        let topic = Topic::text("Ownership", "content", Uuid::new_v4());
        let topic_id = topic.id;
        let mut topics = MockTopicRepository::new();
        topics
            .expect_find_by_id()
            .returning(move |_| Ok(Some(topic.clone())));
        (topics, topic_id)
    }

    #[tokio::test]
    async fn test_generate_quiz_requires_existing_topic() {
        let mut topics = MockTopicRepository::new();
        topics.expect_find_by_id().returning(|_| Ok(None));

        let service = service_with(
            MockQuizRepository::new(),
            MockAttemptRepository::new(),
            topics,
            MockQuizGenerator::new(),
        );

        let result = service
            .generate_quiz(GenerateQuizRequest {
                title: "Ownership basics".to_string(),
                topic_id: Uuid::new_v4(),
                difficulty: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_generate_quiz_uses_provider_questions() {
        let (topics, topic_id) = existing_topic();

        let mut generator = MockQuizGenerator::new();
        generator.expect_generate().returning(|_, _| {
            Ok(vec![GeneratedQuestion {
                text: "What moves ownership?".to_string(),
                options: vec!["let".into(), "clone".into(), "copy".into(), "drop".into()],
                correct_answer: "let".to_string(),
                points: 1,
            }])
        });

        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_create().returning(|q| Ok(q));

        let service = service_with(quizzes, MockAttemptRepository::new(), topics, generator);
        let quiz = service
            .generate_quiz(GenerateQuizRequest {
                title: "Ownership basics".to_string(),
                topic_id,
                difficulty: None,
            })
            .await
            .unwrap();

        assert_eq!(quiz.total_questions, 1);
        assert_eq!(quiz.questions[0].correct_answer, "let");
    }

    #[tokio::test]
    async fn test_generate_quiz_falls_back_when_provider_fails() {
        let (topics, topic_id) = existing_topic();

        let mut generator = MockQuizGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(AppError::NetworkUnreachable("provider down".to_string())));

        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_create().returning(|q| Ok(q));

        let service = service_with(quizzes, MockAttemptRepository::new(), topics, generator);
        let quiz = service
            .generate_quiz(GenerateQuizRequest {
                title: "Ownership basics".to_string(),
                topic_id,
                difficulty: None,
            })
            .await
            .unwrap();

        assert_eq!(quiz.total_questions, 5);
        assert!(quiz.questions[0].text.starts_with("Simulated Question #1"));
        assert_eq!(quiz.questions[0].correct_answer, "Option Alpha");
    }

    #[tokio::test]
    async fn test_save_attempt_rejects_score_above_total() {
        let service = service_with(
            MockQuizRepository::new(),
            MockAttemptRepository::new(),
            MockTopicRepository::new(),
            MockQuizGenerator::new(),
        );

        let result = service
            .save_attempt(SubmitAttemptRequest {
                user_id: Uuid::new_v4(),
                quiz_id: Uuid::new_v4(),
                score: 4,
                total_questions: 3,
                completed_at: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_save_attempt_computes_percentage() {
        let quiz = Quiz::new("Sample", Difficulty::Beginner, Uuid::new_v4(), vec![]);
        let quiz_id = quiz.id;

        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .returning(move |_| Ok(Some(quiz.clone())));

        let mut attempts = MockAttemptRepository::new();
        attempts.expect_create().returning(|a| Ok(a));

        let service = service_with(
            quizzes,
            attempts,
            MockTopicRepository::new(),
            MockQuizGenerator::new(),
        );

        let attempt = service
            .save_attempt(SubmitAttemptRequest {
                user_id: Uuid::new_v4(),
                quiz_id,
                score: 2,
                total_questions: 3,
                completed_at: None,
            })
            .await
            .unwrap();

        assert_eq!(attempt.percentage, 67);
    }

    #[tokio::test]
    async fn test_missing_display_id_not_found() {
        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_find_by_display_id().returning(|_| Ok(None));

        let service = service_with(
            quizzes,
            MockAttemptRepository::new(),
            MockTopicRepository::new(),
            MockQuizGenerator::new(),
        );

        let result = service.get_quiz_by_display_id("QZ-DEADBEEF").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
