use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Material, MaterialKind},
    repositories::{MaterialRepository, TopicRepository},
    services::file_store::FileStore,
};

pub struct NewMaterial<'a> {
    pub title: &'a str,
    pub kind: MaterialKind,
    pub topic_id: Uuid,
    pub url: Option<&'a str>,
    pub file: Option<(&'a Path, &'a str)>, // (temp path, original file name)
}

pub struct MaterialService {
    materials: Arc<dyn MaterialRepository>,
    topics: Arc<dyn TopicRepository>,
    files: Arc<FileStore>,
}

impl MaterialService {
    pub fn new(
        materials: Arc<dyn MaterialRepository>,
        topics: Arc<dyn TopicRepository>,
        files: Arc<FileStore>,
    ) -> Self {
        Self {
            materials,
            topics,
            files,
        }
    }

    pub async fn upload(&self, new: NewMaterial<'_>) -> AppResult<Material> {
        if self.topics.find_by_id(&new.topic_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Topic with id '{}' not found",
                new.topic_id
            )));
        }

        let material = match new.kind {
            MaterialKind::Link => {
                let url = new
                    .url
                    .filter(|u| !u.trim().is_empty())
                    .ok_or_else(|| {
                        AppError::Validation("LINK materials require a url".to_string())
                    })?;
                Material::link(new.title, url, new.topic_id)
            }
            MaterialKind::Pdf | MaterialKind::Video => {
                let (path, original_name) = new.file.ok_or_else(|| {
                    AppError::Validation("PDF and VIDEO materials require a file".to_string())
                })?;
                let stored = self.files.store(path, original_name)?;
                Material::stored_file(new.title, new.kind, &stored, new.topic_id)
            }
        };

        self.materials.create(material).await
    }

    pub async fn get_by_topic(&self, topic_id: &Uuid) -> AppResult<Vec<Material>> {
        self.materials.find_by_topic(topic_id).await
    }

    pub async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.materials.delete(id).await
    }

    pub fn resolve_download(&self, stored_name: &str) -> AppResult<PathBuf> {
        self.files.resolve(stored_name)
    }
}
