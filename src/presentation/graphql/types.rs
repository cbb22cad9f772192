use async_graphql::{ID, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

use crate::domain::models::{
    registration::{FieldError, RegistrationRequest, RegistrationResult},
    user::User,
};

#[derive(InputObject)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterInput> for RegistrationRequest {
    fn from(input: RegisterInput) -> Self {
        Self::new(input.username, input.email, input.password)
    }
}

#[derive(SimpleObject)]
#[graphql(name = "FieldError")]
pub struct FieldErrorObject {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorObject {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            message: error.message,
        }
    }
}

/// Public view of an account. Deliberately has no password field.
#[derive(SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id().to_string()),
            username: user.username().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

#[derive(SimpleObject)]
pub struct UserMutationResponse {
    pub code: i32,
    pub success: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<FieldErrorObject>>,
    pub user: Option<UserObject>,
}

impl From<RegistrationResult> for UserMutationResponse {
    fn from(result: RegistrationResult) -> Self {
        Self {
            code: i32::from(result.code),
            success: result.success,
            message: result.message,
            errors: result
                .errors
                .map(|errors| errors.into_iter().map(FieldErrorObject::from).collect()),
            user: result.user.map(UserObject::from),
        }
    }
}
