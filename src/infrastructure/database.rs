use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::{config::DatabaseConfig, entity::users};

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    info!(
        max_connections = config.max_connections,
        "relational store connected"
    );
    Ok(db)
}

/// Create the `users` table, with its unique constraints, when it does not exist yet.
pub async fn synchronize_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create_users = schema.create_table_from_entity(users::Entity);
    create_users.if_not_exists();

    db.execute(backend.build(&create_users)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    #[tokio::test]
    async fn synchronize_schema_creates_users_table_with_unique_columns() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        synchronize_schema(&db).await.unwrap();

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statement = format!("{:?}", log[0]);
        assert!(statement.contains("CREATE TABLE IF NOT EXISTS"));
        assert!(statement.contains("users"));
        assert!(statement.contains("UNIQUE"));
    }
}
