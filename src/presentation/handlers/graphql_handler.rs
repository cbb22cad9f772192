use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::presentation::graphql::AppSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/* Router Function and Handler Function */

/// function return Router object serving the GraphQL endpoint
/// Suppose to be merged into main router
pub fn create_graphql_router(schema: AppSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .with_state(schema)
}

/// handler function for GraphQL queries and mutations
async fn graphql(State(schema): State<AppSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// handler function serving the GraphiQL IDE
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
