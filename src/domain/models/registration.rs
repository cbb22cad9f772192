use crate::domain::models::user::User;

pub const REGISTRATION_SUCCESSFUL: &str = "User registration successful!";
pub const DUPLICATED_USERNAME_OR_EMAIL: &str = "Duplicated Username or Email";

/// Input of a single registration. The plaintext password lives only as long as the call.
#[derive(Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a registration, successful or not.
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    pub code: u16,
    pub success: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<FieldError>>,
    pub user: Option<User>,
}

impl RegistrationResult {
    /// Rejected input. Field errors are intentionally not attached on this path.
    pub fn invalid_input() -> Self {
        Self {
            code: 400,
            success: false,
            message: None,
            errors: None,
            user: None,
        }
    }

    pub fn duplicated(error: FieldError) -> Self {
        Self {
            code: 400,
            success: false,
            message: Some(DUPLICATED_USERNAME_OR_EMAIL.to_string()),
            errors: Some(vec![error]),
            user: None,
        }
    }

    pub fn registered(user: User) -> Self {
        Self {
            code: 200,
            success: true,
            message: Some(REGISTRATION_SUCCESSFUL.to_string()),
            errors: None,
            user: Some(user),
        }
    }

    pub fn internal_error(detail: &impl std::fmt::Display) -> Self {
        Self {
            code: 500,
            success: false,
            message: Some(format!("Internal server error {}", detail)),
            errors: None,
            user: None,
        }
    }
}
