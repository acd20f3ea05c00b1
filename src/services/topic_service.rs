use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Topic, TopicKind},
    repositories::{SubjectRepository, TopicRepository},
    services::file_store::FileStore,
};

/// Payload of a topic create after multipart decoding: TEXT carries inline
/// content, LINK a url, PDF/VIDEO the temp path of the uploaded file.
pub struct NewTopic<'a> {
    pub name: &'a str,
    pub kind: TopicKind,
    pub subject_id: Uuid,
    pub content: Option<&'a str>,
    pub url: Option<&'a str>,
    pub file: Option<(&'a Path, &'a str)>, // (temp path, original file name)
}

pub struct TopicService {
    topics: Arc<dyn TopicRepository>,
    subjects: Arc<dyn SubjectRepository>,
    files: Arc<FileStore>,
}

impl TopicService {
    pub fn new(
        topics: Arc<dyn TopicRepository>,
        subjects: Arc<dyn SubjectRepository>,
        files: Arc<FileStore>,
    ) -> Self {
        Self {
            topics,
            subjects,
            files,
        }
    }

    pub async fn create_topic(&self, new: NewTopic<'_>) -> AppResult<Topic> {
        if self.subjects.find_by_id(&new.subject_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Subject with id '{}' not found",
                new.subject_id
            )));
        }

        let topic = match new.kind {
            TopicKind::Text => {
                let content = new.content.ok_or_else(|| {
                    AppError::Validation("TEXT topics require content".to_string())
                })?;
                Topic::text(new.name, content, new.subject_id)
            }
            TopicKind::Link => {
                let url = new
                    .url
                    .filter(|u| !u.trim().is_empty())
                    .ok_or_else(|| AppError::Validation("LINK topics require a url".to_string()))?;
                Topic::link(new.name, url, new.subject_id)
            }
            TopicKind::Pdf | TopicKind::Video => {
                let (path, original_name) = new.file.ok_or_else(|| {
                    AppError::Validation("PDF and VIDEO topics require a file".to_string())
                })?;
                let stored = self.files.store(path, original_name)?;
                Topic::file(new.name, new.kind, &stored, new.subject_id)
            }
        };

        self.topics.create(topic).await
    }

    pub async fn get_all_topics(&self) -> AppResult<Vec<Topic>> {
        self.topics.find_all().await
    }

    pub async fn get_topics_by_subject(&self, subject_id: &Uuid) -> AppResult<Vec<Topic>> {
        self.topics.find_by_subject(subject_id).await
    }

    pub async fn delete_topic(&self, id: &Uuid) -> AppResult<()> {
        self.topics.delete(id).await
    }
}
