use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::Config,
    constants::QUIZ_GENERATION_PROMPT,
    errors::{AppError, AppResult},
};

/// One question as returned by the model, before ids are assigned.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: i32,
}

#[derive(Deserialize)]
struct GeneratedQuestionSet {
    questions: Vec<GeneratedQuestion>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, title: &str, topic_name: &str) -> AppResult<Vec<GeneratedQuestion>>;
}

/// Calls an OpenAI-compatible chat completions endpoint.
pub struct HttpQuizGenerator {
    client: reqwest::Client,
    api_url: String,
    api_key: SecretString,
    model: String,
}

impl HttpQuizGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.ai_api_url.clone(),
            api_key: config.ai_api_key.clone(),
            model: config.ai_model.clone(),
        })
    }

    fn parse_questions(content: &str) -> AppResult<Vec<GeneratedQuestion>> {
        // Some models wrap the JSON in a markdown fence despite the prompt.
        let trimmed = content
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim();

        let set: GeneratedQuestionSet = serde_json::from_str(trimmed).map_err(|e| {
            AppError::ServerError(format!("Model returned unparseable questions: {}", e))
        })?;

        if set.questions.is_empty() {
            return Err(AppError::ServerError(
                "Model returned no questions".to_string(),
            ));
        }
        Ok(set.questions)
    }
}

#[async_trait]
impl QuizGenerator for HttpQuizGenerator {
    async fn generate(&self, title: &str, topic_name: &str) -> AppResult<Vec<GeneratedQuestion>> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": QUIZ_GENERATION_PROMPT },
                {
                    "role": "user",
                    "content": format!("Quiz title: {}\nTopic: {}", title, topic_name)
                }
            ],
            "temperature": 0.7
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ServerError(format!(
                "Question provider responded with status {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response.json().await?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AppError::ServerError("Question provider response missing content".to_string())
            })?;

        Self::parse_questions(content)
    }
}
