pub mod hello_resolver;
pub mod types;
pub mod user_resolver;

use async_graphql::{EmptySubscription, Schema};

use crate::usecase::register_user_usecase::DynRegisterUser;
use hello_resolver::HelloQuery;
use user_resolver::UserMutation;

pub type AppSchema = Schema<HelloQuery, UserMutation, EmptySubscription>;

pub fn build_schema(register_service: DynRegisterUser) -> AppSchema {
    Schema::build(HelloQuery, UserMutation, EmptySubscription)
        .data(register_service)
        .finish()
}
