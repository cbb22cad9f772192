use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Service for hashing and verifying passwords
///
/// Hashes are self-describing PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`), so
/// the salt and cost parameters travel with the stored value.
pub trait PasswordHasher: Clone {
    /// Hash a plain text password
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a hashed password.
    /// Only the tests call this until a login flow exists.
    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> Result<bool, DomainError>;
}
