use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::{
        credential::HashedPassword,
        registration::{FieldError, RegistrationRequest, RegistrationResult},
        user::{NewUser, User},
    },
    repositories::user_repository::UserRepository,
    services::password_service::PasswordHasher,
    validation::{ValidationOutcome, validate_register_input},
};

pub type DynRegisterUser = Arc<dyn RegisterUser + Send + Sync>;

/// Entry point of the registration flow. Never fails: every outcome is a [`RegistrationResult`].
#[async_trait]
pub trait RegisterUser {
    async fn register(&self, request: RegistrationRequest) -> RegistrationResult;
}

pub struct RegisterUserUsecase<R: UserRepository, P: PasswordHasher> {
    user_repository: R,
    password_hasher: P,
}

impl<R: UserRepository, P: PasswordHasher> RegisterUserUsecase<R, P> {
    pub fn new(user_repository: R, password_hasher: P) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

impl<R, P> RegisterUserUsecase<R, P>
where
    R: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync + 'static,
{
    async fn try_register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationResult, DomainError> {
        let RegistrationRequest {
            username,
            email,
            password,
        } = request;

        if let Some(existing) = self
            .user_repository
            .find_conflicting(&username, &email)
            .await?
        {
            return Ok(duplicated(&existing, &username));
        }

        let password_hash = self.hash_password(password).await?;
        let new_user = NewUser::new(username.clone(), email.clone(), password_hash);

        match self.user_repository.save(new_user).await {
            Ok(user) => {
                info!(user_id = %user.id(), "user registered");
                Ok(RegistrationResult::registered(user))
            }
            // another registration won the race between lookup and insert
            Err(RepositoryError::UniqueViolation(detail)) => {
                let existing = self
                    .user_repository
                    .find_conflicting(&username, &email)
                    .await?
                    .ok_or(RepositoryError::UniqueViolation(detail))?;
                Ok(duplicated(&existing, &username))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Argon2 is CPU bound, so it runs on the blocking pool.
    async fn hash_password(&self, password: String) -> Result<HashedPassword, DomainError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::PasswordHashing(e.to_string()))?
    }
}

fn duplicated(existing: &User, username: &str) -> RegistrationResult {
    let error = if existing.username() == username {
        FieldError::new("username", "Username already taken")
    } else {
        FieldError::new("email", "Email already taken")
    };
    warn!(field = %error.field, "registration rejected: duplicated account");
    RegistrationResult::duplicated(error)
}

#[async_trait]
impl<R, P> RegisterUser for RegisterUserUsecase<R, P>
where
    R: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync + 'static,
{
    async fn register(&self, request: RegistrationRequest) -> RegistrationResult {
        if let ValidationOutcome::Invalid { message, errors } = validate_register_input(&request) {
            debug!(%message, ?errors, "registration input rejected");
            return RegistrationResult::invalid_input();
        }

        match self.try_register(request).await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "registration failed");
                RegistrationResult::internal_error(&e)
            }
        }
    }
}
