use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Role,
        dto::{request::UpdateUserRequest, response::UserResponse},
    },
    repositories::UserRepository,
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: &Uuid) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))?;
        Ok(UserResponse::from(user))
    }

    pub async fn update_user(&self, id: &Uuid, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(raw_role) = request.role {
            user.role = Role::parse_normalized(&raw_role)
                .ok_or_else(|| AppError::Validation(format!("Unknown role '{}'", raw_role)))?;
        }

        let updated = self.users.update(id, user).await?;
        Ok(UserResponse::from(updated))
    }

    pub async fn delete_user(&self, id: &Uuid) -> AppResult<()> {
        self.users.delete(id).await
    }
}
