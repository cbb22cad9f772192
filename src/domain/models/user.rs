use chrono::{DateTime, Utc};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};

use crate::domain::models::credential::HashedPassword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(Uuid);
impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted account. The password hash never leaves the process through serde.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    #[serde(skip_serializing)]
    password_hash: HashedPassword,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub fn reconstruct(
        id: UserId,
        username: String,
        email: String,
        password_hash: HashedPassword,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }

    // getters only
    pub fn id(&self) -> UserId {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// An account that has not been saved yet. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: HashedPassword,
}

impl NewUser {
    pub fn new(username: String, email: String, password_hash: HashedPassword) -> Self {
        Self {
            username,
            email,
            password_hash,
        }
    }

    /// Turn the pending record into a saved user with the given identity.
    #[cfg(test)]
    pub fn into_user(self, id: UserId, now: DateTime<Utc>) -> User {
        User::reconstruct(id, self.username, self.email, self.password_hash, now, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_user_never_contains_password_hash() {
        let user = NewUser::new(
            "validuser".to_string(),
            "v@b.com".to_string(),
            HashedPassword::new("$argon2id$v=19$secret".to_string()),
        )
        .into_user(UserId::new(), Utc::now());

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["username"], "validuser");
        assert_eq!(json["email"], "v@b.com");
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("argon2"));
    }

    #[test]
    fn debug_output_redacts_password_hash() {
        let hash = HashedPassword::new("$argon2id$v=19$secret".to_string());
        assert!(!format!("{:?}", hash).contains("secret"));
    }
}
