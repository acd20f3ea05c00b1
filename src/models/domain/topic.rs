use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TopicKind {
    Text,
    Pdf,
    Video,
    Link,
}

impl TopicKind {
    pub fn parse_normalized(value: &str) -> Option<TopicKind> {
        match value.trim().to_uppercase().as_str() {
            "TEXT" => Some(TopicKind::Text),
            "PDF" => Some(TopicKind::Pdf),
            "VIDEO" => Some(TopicKind::Video),
            "LINK" => Some(TopicKind::Link),
            _ => None,
        }
    }
}

/// Exactly one of `content`, `file_path`, `url` is populated, depending on
/// the kind: TEXT carries content, PDF/VIDEO a stored file, LINK a url.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TopicKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub subject_id: Uuid,
}

impl Topic {
    pub fn text(name: &str, content: &str, subject_id: Uuid) -> Self {
        Topic {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind: TopicKind::Text,
            content: Some(content.to_string()),
            file_path: None,
            url: None,
            subject_id,
        }
    }

    pub fn file(name: &str, kind: TopicKind, file_path: &str, subject_id: Uuid) -> Self {
        Topic {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            content: None,
            file_path: Some(file_path.to_string()),
            url: None,
            subject_id,
        }
    }

    pub fn link(name: &str, url: &str, subject_id: Uuid) -> Self {
        Topic {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind: TopicKind::Link,
            content: None,
            file_path: None,
            url: Some(url.to_string()),
            subject_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_normalized() {
        assert_eq!(TopicKind::parse_normalized("pdf"), Some(TopicKind::Pdf));
        assert_eq!(TopicKind::parse_normalized(" VIDEO "), Some(TopicKind::Video));
        assert_eq!(TopicKind::parse_normalized("doc"), None);
    }

    #[test]
    fn test_topic_type_field_on_wire() {
        let topic = Topic::text("Ownership", "Moves and borrows", Uuid::new_v4());
        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(json["type"], "TEXT");
        assert_eq!(json["content"], "Moves and borrows");
        assert!(json.get("filePath").is_none());
    }
}
