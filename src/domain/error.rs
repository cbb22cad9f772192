use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The store rejected a write because a unique column already holds the value.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}
