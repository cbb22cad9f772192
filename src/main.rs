mod config;
mod domain;
mod entity;
mod infrastructure;
mod presentation;
mod telemetry;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, database, session_store::SessionStore,
        user_repository::SeaOrmUserRepository,
    },
    presentation::{
        graphql::build_schema,
        handlers::graphql_handler::{GRAPHQL_PATH, create_graphql_router},
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_file = dotenvy::dotenv().ok();
    telemetry::init_tracing()?;
    match env_file {
        Some(path) => info!(path = %path.display(), "loaded environment file"),
        None => debug!("no .env file found, using process environment"),
    }

    let config = AppConfig::from_env()?;

    let db = database::connect(&config.database).await?;
    database::synchronize_schema(&db).await?;

    // Session/Cookies store
    let _session_store = match &config.session_store {
        Some(session_config) => match SessionStore::connect(session_config).await {
            Ok(store) => {
                info!(database = store.database_name(), "session store connected");
                Some(store)
            }
            Err(error) => {
                warn!(%error, "failed to connect to session store, proceeding without it");
                None
            }
        },
        None => {
            warn!("SESSION_DB_URL not set, session store disabled");
            None
        }
    };

    let user_repository = SeaOrmUserRepository::new(db);
    let password_hasher = Argon2PasswordHasher::new();
    let register_user_usecase = RegisterUserUsecase::new(user_repository, password_hasher);
    let schema = build_schema(Arc::new(register_user_usecase));

    let app = Router::new()
        .route("/", get(|| async { "register-api is running" }))
        .merge(create_graphql_router(schema));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, path = GRAPHQL_PATH, "server started, GraphQL endpoint ready");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
