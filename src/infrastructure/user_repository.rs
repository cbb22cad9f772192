use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, SqlErr,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            credential::HashedPassword,
            user::{NewUser, User, UserId},
        },
        repositories::user_repository::UserRepository,
    },
    entity::users,
};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User::reconstruct(
            UserId::from_uuid(model.id),
            model.username,
            model.email,
            HashedPassword::new(model.password),
            model.created_at.naive_utc().and_utc(),
            model.updated_at.naive_utc().and_utc(),
        )
    }
}

fn map_db_err(e: DbErr) -> RepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::UniqueViolation(detail),
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_conflicting(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(username))
                    .add(users::Column::Email.eq(email)),
            )
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(User::from))
    }

    async fn save(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let user_model = users::ActiveModel {
            id: Set(*UserId::new().as_uuid()),
            username: Set(new_user.username),
            email: Set(new_user.email),
            password: Set(new_user.password_hash.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = user_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(saved.into())
    }
}
