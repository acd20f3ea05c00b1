use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role strings on the wire are always UPPERCASE; incoming values are
/// trimmed and uppercased before any comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn parse_normalized(value: &str) -> Option<Role> {
        match value.trim().to_uppercase().as_str() {
            "STUDENT" => Some(Role::Student),
            "INSTRUCTOR" => Some(Role::Instructor),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Instructor => "INSTRUCTOR",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    // Stored salted hash. Never leaves the server; HTTP responses use
    // UserResponse, which drops this field.
    pub password_hash: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(name: &str, email: &str, password_hash: &str, role: Role) -> Self {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_normalized() {
        assert_eq!(Role::parse_normalized("student"), Some(Role::Student));
        assert_eq!(Role::parse_normalized("  Instructor "), Some(Role::Instructor));
        assert_eq!(Role::parse_normalized("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse_normalized("superuser"), None);
        assert_eq!(Role::parse_normalized(""), None);
    }

    #[test]
    fn test_role_serializes_uppercase() {
        let json = serde_json::to_string(&Role::Student).unwrap();
        assert_eq!(json, "\"STUDENT\"");
    }

    #[test]
    fn test_user_creation() {
        let user = User::new("Jane Doe", "jane@example.com", "salt$hash", Role::Instructor);
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.role, Role::Instructor);
        assert!(user.created_at.is_some());
    }
}
