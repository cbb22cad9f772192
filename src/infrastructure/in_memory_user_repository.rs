//! Vec-backed [`UserRepository`] used by tests in place of the relational store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User, UserId},
    repositories::user_repository::UserRepository,
};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    lookup_failure: Option<String>,
    save_failure: Option<String>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            ..Self::default()
        }
    }

    /// Every `find_conflicting` fails with a database error carrying `message`.
    pub fn failing_lookups(message: &str) -> Self {
        Self {
            lookup_failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Every `save` fails with a database error carrying `message`.
    pub fn failing_saves(message: &str) -> Self {
        Self {
            save_failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_conflicting(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, RepositoryError> {
        if let Some(message) = &self.lookup_failure {
            return Err(RepositoryError::DatabaseError(message.clone()));
        }

        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username() == username || user.email() == email)
            .cloned())
    }

    async fn save(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        if let Some(message) = &self.save_failure {
            return Err(RepositoryError::DatabaseError(message.clone()));
        }

        let user = new_user.into_user(UserId::new(), Utc::now());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}
