pub mod graphql;
pub mod handlers;
