use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{domain::Role, dto::response::AuthResponse};

/// Storage keys, fixed so a session written by one client build is readable
/// by the next.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const ROLE: &str = "role";
    pub const USER_ID: &str = "userId";
    pub const USER: &str = "user";
}

/// String key-value persistence for the session. Implementations range from
/// an in-memory map to whatever the embedding UI offers.
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// The client's view of who is signed in. Interior mutability so readers do
/// not need `&mut` just to look at the token.
pub struct Session<S: SessionStore> {
    store: Mutex<S>,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Persists everything the login response carries.
    pub fn establish(&self, auth: &AuthResponse) {
        let mut store = self.lock();
        store.set(keys::TOKEN, &auth.token);
        store.set(keys::ROLE, auth.role.as_str());
        store.set(keys::USER_ID, &auth.id.to_string());
        if let Ok(blob) = serde_json::to_string(auth) {
            store.set(keys::USER, &blob);
        }
    }

    /// Removes every session key unconditionally.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// The stored token, if present and not expired. An expired token is
    /// cleared on read and reported as absent.
    pub fn token(&self) -> Option<String> {
        let token = self.lock().get(keys::TOKEN)?;
        match token_expiry(&token) {
            Some(exp) if exp > Utc::now().timestamp() => Some(token),
            _ => {
                self.clear();
                None
            }
        }
    }

    pub fn role(&self) -> Option<Role> {
        let raw = self.lock().get(keys::ROLE)?;
        Role::parse_normalized(&raw)
    }

    pub fn user_id(&self) -> Option<Uuid> {
        let raw = self.lock().get(keys::USER_ID)?;
        Uuid::parse_str(&raw).ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, S> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Deserialize)]
struct ExpClaim {
    exp: i64,
}

/// Reads the `exp` claim without verifying the signature. The client never
/// holds the signing secret; the server re-checks every request anyway.
fn token_expiry(token: &str) -> Option<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    jsonwebtoken::decode::<ExpClaim>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims.exp)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtService;
    use crate::config::Config;
    use crate::models::domain::User;

    fn auth_response(role: Role, expiration_hours: i64) -> AuthResponse {
        let config = Config::test_config();
        let jwt = JwtService::new(&config.jwt_secret, expiration_hours);
        let user = User::new("Jane", "jane@example.com", "salt$hash", role);
        AuthResponse {
            token: jwt.create_token(&user).unwrap(),
            role: user.role,
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }

    #[test]
    fn test_establish_then_read_back() {
        let session = Session::new(MemoryStore::new());
        let auth = auth_response(Role::Student, 1);
        session.establish(&auth);

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Student));
        assert_eq!(session.user_id(), Some(auth.id));
    }

    #[test]
    fn test_clear_removes_everything() {
        let session = Session::new(MemoryStore::new());
        session.establish(&auth_response(Role::Instructor, 1));
        session.clear();

        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_expired_token_reads_as_absent_and_clears() {
        let session = Session::new(MemoryStore::new());
        session.establish(&auth_response(Role::Student, -1));

        assert_eq!(session.token(), None);
        // The implicit clear also dropped the role.
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_garbage_token_is_not_authenticated() {
        let session = Session::new(MemoryStore::new());
        {
            let mut store = session.store.lock().unwrap();
            store.set(keys::TOKEN, "not-a-jwt");
        }
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_token_expiry_decodes_without_secret() {
        let auth = auth_response(Role::Student, 1);
        let exp = token_expiry(&auth.token).unwrap();
        assert!(exp > Utc::now().timestamp());
    }
}
