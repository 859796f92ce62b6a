//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staybook_core::types::UserId;

/// A registered guest or host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login email, unique across users.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Upper-cased initials derived from the names.
    pub initials: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Free-form biography.
    pub bio: Option<String>,
    /// Argon2id password hash. Persisted, never returned by the API.
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last modified.
    pub modified_at: DateTime<Utc>,
}

impl User {
    /// Builds a new user from sign-up data, deriving initials and avatar.
    pub fn from_create(id: UserId, data: CreateUser, now: DateTime<Utc>) -> Self {
        let initials = initials_for(&data.first_name, &data.last_name);
        Self {
            id,
            avatar_url: Some(format!("https://i.pravatar.cc/150?img={id}")),
            bio: Some(String::new()),
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            initials,
            password_hash: data.password_hash,
            created_at: now,
            modified_at: now,
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// First character of each name, upper-cased.
pub fn initials_for(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}
