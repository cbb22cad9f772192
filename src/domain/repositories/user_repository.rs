use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User},
};

#[async_trait]
pub trait UserRepository {
    /// Single lookup for an account holding either the username or the email.
    async fn find_conflicting(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, RepositoryError>;

    /// Persist a new account, returning it with its assigned id and timestamps.
    async fn save(&self, new_user: NewUser) -> Result<User, RepositoryError>;
}
