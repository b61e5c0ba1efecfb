use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DisplayBalanceQuery;

#[Object]
impl DisplayBalanceQuery {
    /// Remote balance minus local fallback spend. Fetches the remote balance when not given.
    async fn display_balance(
        &self,
        context: &Context<'_>,
        remote_balance: Option<f64>,
    ) -> GqlResult<f64> {
        let state = context.data_unchecked::<AppState>();
        let balance = match remote_balance {
            Some(remote_balance) => state.display_balance.handle(remote_balance).await?,
            None => state.display_balance.handle_with_remote_balance().await?,
        };
        Ok(balance)
    }
}
