pub mod graphql_handler;
