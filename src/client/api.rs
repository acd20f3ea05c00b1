use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    client::{
        attempt::{AttemptEngine, AttemptSubmitter},
        session::{Session, SessionStore},
    },
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizAttempt, Role},
        dto::{request::SubmitAttemptRequest, response::AuthResponse},
    },
};

/// Body shape of server error responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client over the server's REST surface, bound to one session.
pub struct ApiClient<S: SessionStore> {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session<S>>,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(base_url: &str, session: Arc<Session<S>>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let auth: AuthResponse = self.read(response).await?;
        self.session.establish(&auth);
        Ok(auth)
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub async fn fetch_quiz(&self, display_id: &str) -> AppResult<Quiz> {
        let request = self
            .http
            .get(format!("{}/api/quizzes/public/{}", self.base_url, display_id));
        let response = self.authorize(request)?.send().await?;
        self.read(response).await
    }

    /// Fetches the quiz and opens a fresh attempt session for it. Only a
    /// signed-in student may start one; the server enforces the same rules.
    pub async fn start_attempt(&self, display_id: &str) -> AppResult<AttemptEngine> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthenticated(
                "Sign in to take a quiz".to_string(),
            ));
        }
        if self.session.role() != Some(Role::Student) {
            return Err(AppError::Forbidden(
                "Only students can take quizzes".to_string(),
            ));
        }
        let user_id = self.session.user_id().ok_or_else(|| {
            AppError::Unauthenticated("Session has no user id".to_string())
        })?;

        let quiz = self.fetch_quiz(display_id).await?;
        Ok(AttemptEngine::new(quiz, user_id))
    }

    pub async fn submit_attempt(&self, request: SubmitAttemptRequest) -> AppResult<QuizAttempt> {
        let builder = self
            .http
            .post(format!("{}/api/quizzes/submit-attempt", self.base_url))
            .json(&request);
        let response = self.authorize(builder)?.send().await?;
        self.read(response).await
    }

    pub async fn my_attempts(&self) -> AppResult<Vec<QuizAttempt>> {
        let user_id = self.session.user_id().ok_or_else(|| {
            AppError::Unauthenticated("Sign in to see your attempts".to_string())
        })?;

        let request = self.http.get(format!(
            "{}/api/quizzes/user-attempts/{}",
            self.base_url, user_id
        ));
        let response = self.authorize(request)?.send().await?;
        self.read(response).await
    }

    fn authorize(&self, builder: RequestBuilder) -> AppResult<RequestBuilder> {
        let token = self
            .session
            .token()
            .ok_or_else(|| AppError::Unauthenticated("No active session".to_string()))?;
        Ok(builder.bearer_auth(token))
    }

    /// Maps the response status onto the error taxonomy. A 401 wipes the
    /// session; a 403 leaves it intact, since the credentials are fine and
    /// only the role is wrong.
    async fn read<T: DeserializeOwned>(&self, response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| AppError::ServerError(format!("Unparseable response: {}", e)));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("Request failed with status {}", status));

        Err(match status {
            StatusCode::UNAUTHORIZED => {
                self.session.clear();
                AppError::Unauthenticated(message)
            }
            StatusCode::FORBIDDEN => AppError::Forbidden(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::CONFLICT => AppError::AlreadyExists(message),
            StatusCode::BAD_REQUEST => AppError::Validation(message),
            _ => AppError::ServerError(message),
        })
    }
}

#[async_trait]
impl<S: SessionStore> AttemptSubmitter for ApiClient<S> {
    async fn send(&self, request: SubmitAttemptRequest) -> AppResult<QuizAttempt> {
        self.submit_attempt(request).await
    }
}
