use async_graphql::{Context, Object, Result};

use crate::{
    presentation::graphql::types::{RegisterInput, UserMutationResponse},
    usecase::register_user_usecase::DynRegisterUser,
};

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Create an account. Failures are reported inside the response, never as GraphQL errors.
    async fn register(
        &self,
        ctx: &Context<'_>,
        register_input: RegisterInput,
    ) -> Result<UserMutationResponse> {
        let register_service = ctx.data::<DynRegisterUser>()?;
        let result = register_service.register(register_input.into()).await;
        Ok(result.into())
    }
}
