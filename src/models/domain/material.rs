use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialKind {
    Pdf,
    Video,
    Link,
}

impl MaterialKind {
    pub fn parse_normalized(value: &str) -> Option<MaterialKind> {
        match value.trim().to_uppercase().as_str() {
            "PDF" => Some(MaterialKind::Pdf),
            "VIDEO" => Some(MaterialKind::Video),
            "LINK" => Some(MaterialKind::Link),
            _ => None,
        }
    }
}

/// LINK materials carry a url; PDF/VIDEO materials carry the name of a file
/// stored in the upload directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub topic_id: Uuid,
}

impl Material {
    pub fn stored_file(title: &str, kind: MaterialKind, file_path: &str, topic_id: Uuid) -> Self {
        Material {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind,
            file_path: Some(file_path.to_string()),
            url: None,
            topic_id,
        }
    }

    pub fn link(title: &str, url: &str, topic_id: Uuid) -> Self {
        Material {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind: MaterialKind::Link,
            file_path: None,
            url: Some(url.to_string()),
            topic_id,
        }
    }
}
