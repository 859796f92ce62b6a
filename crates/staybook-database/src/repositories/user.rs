//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use staybook_core::error::AppError;
use staybook_core::result::AppResult;
use staybook_core::traits::Repository;
use staybook_core::types::{UserId, next_id};
use staybook_entity::user::{CreateUser, User};

use crate::store::DataStore;

/// Message returned when signing up with an email that is already taken.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email already exists";

/// Repository for user lookups and registration.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<DataStore>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = email.to_lowercase();
        Ok(self
            .store
            .read(|db| {
                db.users
                    .iter()
                    .find(|u| u.email.to_lowercase() == email)
                    .cloned()
            })
            .await)
    }

    /// Insert a new user. Fails with a validation error when the email is
    /// already registered.
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        let user = self
            .store
            .write(|db| {
                let email = data.email.to_lowercase();
                if db.users.iter().any(|u| u.email.to_lowercase() == email) {
                    return Err(AppError::validation(DUPLICATE_EMAIL_MESSAGE));
                }

                let id: UserId = next_id(db.users.iter().map(|u| u.id));
                let user = User::from_create(id, data, Utc::now());
                db.users.push(user.clone());
                Ok(user)
            })
            .await?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }
}

#[async_trait]
impl Repository<User, UserId> for UserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .store
            .read(|db| db.users.iter().find(|u| u.id == id).cloned())
            .await)
    }
}
