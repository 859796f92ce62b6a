//! Public user projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staybook_core::types::UserId;

use super::model::User;

/// A user without credentials, safe to hand to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            initials: user.initials.clone(),
            avatar_url: user.avatar_url.clone(),
            bio: user.bio.clone(),
            created_at: user.created_at,
            modified_at: user.modified_at,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
