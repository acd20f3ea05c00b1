use std::sync::Arc;

use crate::{
    auth::{password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::{Role, User},
        dto::{request::RegisterRequest, response::AuthResponse},
    },
    repositories::UserRepository,
};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let role = match request.role.as_deref() {
            None => Role::Student,
            Some(raw) => Role::parse_normalized(raw)
                .ok_or_else(|| AppError::Validation(format!("Unknown role '{}'", raw)))?,
        };

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "An account with email '{}' already exists",
                request.email
            )));
        }

        let hash = password::hash_password(&request.password);
        let user = User::new(&request.name, &request.email, &hash, role);

        let created = self.users.create(user).await?;
        log::info!("registered {} account for {}", created.role, created.email);
        Ok(created)
    }

    /// Both an unknown email and a wrong password report the same error, so
    /// login failures do not reveal which accounts exist.
    pub async fn login(&self, email: &str, raw_password: &str) -> AppResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthenticated("Invalid credentials".to_string()))?;

        if !password::verify_password(raw_password, &user.password_hash) {
            return Err(AppError::Unauthenticated("Invalid credentials".to_string()));
        }

        let token = self.jwt.create_token(&user)?;

        Ok(AuthResponse {
            token,
            role: user.role,
            id: user.id,
            email: user.email,
            name: user.name,
        })
    }
}
