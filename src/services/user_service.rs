// src/services/user_service.rs
use crate::domain::{validate_credentials, validate_id, Credentials, ROLE_ADMIN};
use crate::error::{AppError, AppResult};
use crate::repositories::UserRepository;
use std::sync::Arc;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Registers an account holding the default role.
    pub fn sign_up(&self, credentials: Credentials) -> AppResult<i64> {
        validate_credentials(&credentials)?;
        self.user_repo.save(&credentials)
    }

    /// Resolves credentials to a user id.
    pub fn sign_in(&self, credentials: Credentials) -> AppResult<i64> {
        validate_credentials(&credentials)?;
        self.user_repo
            .find_id(&credentials)?
            .ok_or(AppError::InvalidCredentials)
    }

    pub fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        self.user_repo.is_admin(user_id)
    }

    pub fn grant_role(&self, user_id: i64, role_name: &str) -> AppResult<()> {
        validate_id("user_id", user_id)?;
        self.user_repo.grant_role(user_id, role_name)
    }

    pub fn grant_admin(&self, user_id: i64) -> AppResult<()> {
        self.grant_role(user_id, ROLE_ADMIN)
    }
}
